//! Signup service - Handles account creation for drivers and stations.
//!
//! SOLID (SRP): Handles signup use cases only. Storage and uniqueness
//! lookups go through the injected `ProfileDirectory`.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    only_digits, HashedPassword, Profile, SignupRequest, MSG_CNPJ_TAKEN, MSG_CPF_TAKEN,
    MSG_EMAIL_TAKEN, MSG_PHONE_TAKEN,
};

use crate::repository::ProfileDirectory;

/// Signup service trait for dependency injection.
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Validate the form, reject duplicates, hash the password and store
    /// the profile.
    async fn register(&self, request: SignupRequest) -> AppResult<Profile>;

    /// Run only the duplicate checks, stopping at the first field taken.
    ///
    /// Drivers: email, CPF, phone. Stations: email, CNPJ.
    async fn check_duplicates(&self, request: &SignupRequest) -> AppResult<()>;

    /// Get a profile by ID
    async fn get_profile(&self, id: Uuid) -> AppResult<Profile>;
}

/// Concrete implementation of SignupService using a profile directory.
pub struct SignupManager {
    directory: Arc<dyn ProfileDirectory>,
}

impl SignupManager {
    /// Create new signup service instance with a directory
    pub fn new(directory: Arc<dyn ProfileDirectory>) -> Self {
        Self { directory }
    }
}

fn duplicate(field: &str, message: &str) -> AppError {
    warn!(field, "Signup rejected: duplicate value");
    AppError::conflict(field, message)
}

#[async_trait]
impl SignupService for SignupManager {
    async fn register(&self, request: SignupRequest) -> AppResult<Profile> {
        let role = request.role();

        if let Err(errors) = request.validate() {
            debug!(%role, invalid_fields = errors.len(), "Signup rejected by form validation");
            return Err(errors.into());
        }

        self.check_duplicates(&request).await?;

        let password_hash = HashedPassword::new(request.password())?;
        let profile = self
            .directory
            .create(request.into_new_profile(password_hash)?)
            .await?;

        info!(profile_id = %profile.id, %role, status = ?profile.status, "Profile created");
        Ok(profile)
    }

    async fn check_duplicates(&self, request: &SignupRequest) -> AppResult<()> {
        if self.directory.email_exists(&request.email()).await? {
            return Err(duplicate("email", MSG_EMAIL_TAKEN));
        }

        match request {
            SignupRequest::Driver(driver) => {
                if self.directory.cpf_exists(&only_digits(&driver.cpf)).await? {
                    return Err(duplicate("cpf", MSG_CPF_TAKEN));
                }
                if self
                    .directory
                    .phone_exists(&only_digits(&driver.telefone))
                    .await?
                {
                    return Err(duplicate("telefone", MSG_PHONE_TAKEN));
                }
            }
            SignupRequest::Station(station) => {
                if self.directory.cnpj_exists(&only_digits(&station.cnpj)).await? {
                    return Err(duplicate("cnpj", MSG_CNPJ_TAKEN));
                }
            }
        }

        Ok(())
    }

    async fn get_profile(&self, id: Uuid) -> AppResult<Profile> {
        self.directory.find_by_id(id).await?.ok_or_not_found()
    }
}
