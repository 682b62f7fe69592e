//! Profile directory: uniqueness lookups and profile storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{
    NewProfile, Profile, UserRole, MSG_CNPJ_TAKEN, MSG_CPF_TAKEN, MSG_EMAIL_TAKEN, MSG_PHONE_TAKEN,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Data access needed by the signup flow.
///
/// Arguments are already normalized: lower-cased email, bare digits for
/// documents and phones.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// Whether any profile uses this email
    async fn email_exists(&self, email: &str) -> AppResult<bool>;

    /// Whether a driver profile uses this CPF
    async fn cpf_exists(&self, cpf: &str) -> AppResult<bool>;

    /// Whether a station profile uses this CNPJ
    async fn cnpj_exists(&self, cnpj: &str) -> AppResult<bool>;

    /// Whether a driver profile uses this phone number
    async fn phone_exists(&self, phone: &str) -> AppResult<bool>;

    /// Store a new profile. Fails with a conflict if the email, document or
    /// driver phone was taken in the meantime.
    async fn create(&self, profile: NewProfile) -> AppResult<Profile>;

    /// Find a profile by id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>>;
}

/// Process-local directory used in development and tests.
#[derive(Default)]
pub struct InMemoryDirectory {
    profiles: RwLock<HashMap<Uuid, Profile>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }

    async fn any(&self, pred: impl Fn(&Profile) -> bool) -> bool {
        self.profiles.read().await.values().any(pred)
    }
}

fn document_conflict(role: UserRole) -> AppError {
    match role {
        UserRole::Motorista => AppError::conflict("cpf", MSG_CPF_TAKEN),
        UserRole::Posto => AppError::conflict("cnpj", MSG_CNPJ_TAKEN),
    }
}

#[async_trait]
impl ProfileDirectory for InMemoryDirectory {
    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        Ok(self.any(|p| p.email == email).await)
    }

    async fn cpf_exists(&self, cpf: &str) -> AppResult<bool> {
        Ok(self
            .any(|p| p.role == UserRole::Motorista && p.document == cpf)
            .await)
    }

    async fn cnpj_exists(&self, cnpj: &str) -> AppResult<bool> {
        Ok(self
            .any(|p| p.role == UserRole::Posto && p.document == cnpj)
            .await)
    }

    async fn phone_exists(&self, phone: &str) -> AppResult<bool> {
        Ok(self
            .any(|p| p.role == UserRole::Motorista && p.phone == phone)
            .await)
    }

    async fn create(&self, profile: NewProfile) -> AppResult<Profile> {
        let mut profiles = self.profiles.write().await;

        // Unique constraints, checked under the write lock
        if profiles.values().any(|p| p.email == profile.email) {
            return Err(AppError::conflict("email", MSG_EMAIL_TAKEN));
        }
        if profiles
            .values()
            .any(|p| p.role == profile.role && p.document == profile.document)
        {
            return Err(document_conflict(profile.role));
        }
        if profile.role == UserRole::Motorista
            && profiles
                .values()
                .any(|p| p.role == UserRole::Motorista && p.phone == profile.phone)
        {
            return Err(AppError::conflict("telefone", MSG_PHONE_TAKEN));
        }

        let profile = Profile::create(profile);
        profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }
}
