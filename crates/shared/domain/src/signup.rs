//! Signup requests per role and the profiles they create.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::address::{missing_station_fields, Address, Location};
use crate::constants::*;
use crate::contact::{mask_phone, validate_email, validate_phone};
use crate::digits::only_digits;
use crate::document::{mask_cnpj, mask_cpf, validate_cnpj, validate_cpf, Cnpj, Cpf};
use crate::error::{DomainError, DomainResult, FieldErrors};
use crate::password::{validate_password, HashedPassword};
use crate::plate::{self, validate_license_plate};

/// Account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Motorista,
    Posto,
}

impl std::str::FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_MOTORISTA => Ok(UserRole::Motorista),
            ROLE_POSTO => Ok(UserRole::Posto),
            other => Err(DomainError::validation(format!("Unknown role: {}", other))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Motorista => write!(f, "{}", ROLE_MOTORISTA),
            UserRole::Posto => write!(f, "{}", ROLE_POSTO),
        }
    }
}

/// Lifecycle of a newly created profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    /// Ready to use (drivers)
    Active,
    /// Station still missing profile fields
    Incomplete,
    /// Station complete, waiting for review
    Pending,
}

/// Driver signup form
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DriverSignup {
    #[cfg_attr(feature = "openapi", schema(example = "Maria Silva"))]
    pub nome: String,
    #[cfg_attr(feature = "openapi", schema(example = "111.444.777-35"))]
    pub cpf: String,
    #[cfg_attr(feature = "openapi", schema(example = "(11) 98765-4321"))]
    pub telefone: String,
    #[cfg_attr(feature = "openapi", schema(example = "maria@exemplo.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "Segura123", min_length = 8))]
    pub senha: String,
    pub confirmar_senha: String,
    /// Optional vehicle plate
    #[cfg_attr(feature = "openapi", schema(example = "ABC1D23"))]
    pub placa: Option<String>,
}

/// Station signup form
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StationSignup {
    #[cfg_attr(feature = "openapi", schema(example = "11.222.333/0001-81"))]
    pub cnpj: String,
    #[cfg_attr(feature = "openapi", schema(example = "Posto Central"))]
    pub nome_fantasia: String,
    #[cfg_attr(feature = "openapi", schema(example = "contato@postocentral.com.br"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "(11) 3456-7890"))]
    pub telefone: String,
    pub endereco: Option<Address>,
    pub localizacao: Option<Location>,
    #[cfg_attr(feature = "openapi", schema(example = "Shell"))]
    pub bandeira: String,
    pub responsavel_nome: String,
    pub responsavel_telefone: String,
    pub senha: String,
    pub confirmar_senha: String,
}

// Passwords never reach debug output
impl std::fmt::Debug for DriverSignup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverSignup")
            .field("nome", &self.nome)
            .field("cpf", &self.cpf)
            .field("telefone", &self.telefone)
            .field("email", &self.email)
            .field("placa", &self.placa)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for StationSignup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StationSignup")
            .field("cnpj", &self.cnpj)
            .field("nome_fantasia", &self.nome_fantasia)
            .field("email", &self.email)
            .field("telefone", &self.telefone)
            .field("endereco", &self.endereco)
            .field("localizacao", &self.localizacao)
            .field("bandeira", &self.bandeira)
            .finish_non_exhaustive()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Lower-cased, trimmed email used for storage and duplicate lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn check_required(errors: &mut FieldErrors, field: &str, value: &str, required: &str) -> bool {
    if is_blank(value) {
        errors.add(field, required);
        false
    } else {
        true
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if check_required(errors, "email", email, MSG_EMAIL_REQUIRED) && !validate_email(email.trim())
    {
        errors.add("email", MSG_EMAIL_INVALID);
    }
}

fn check_phone(errors: &mut FieldErrors, field: &str, phone: &str, required: &str) {
    if check_required(errors, field, phone, required) && !validate_phone(phone) {
        errors.add(field, MSG_PHONE_INVALID);
    }
}

fn check_passwords(errors: &mut FieldErrors, senha: &str, confirmar_senha: &str) {
    if senha.is_empty() {
        errors.add("senha", MSG_PASSWORD_REQUIRED);
    } else {
        let check = validate_password(senha);
        if !check.is_valid {
            errors.add("senha", check.errors.join(", "));
        }
    }

    if confirmar_senha.is_empty() {
        errors.add("confirmar_senha", MSG_PASSWORD_CONFIRMATION_REQUIRED);
    } else if senha != confirmar_senha {
        errors.add("confirmar_senha", MSG_PASSWORD_MISMATCH);
    }
}

impl DriverSignup {
    /// Collect every failing field, in form order.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        check_required(&mut errors, "nome", &self.nome, MSG_NAME_REQUIRED);
        if check_required(&mut errors, "cpf", &self.cpf, MSG_CPF_REQUIRED) && !validate_cpf(&self.cpf)
        {
            errors.add("cpf", MSG_CPF_INVALID);
        }
        check_phone(&mut errors, "telefone", &self.telefone, MSG_PHONE_REQUIRED);
        check_email(&mut errors, &self.email);
        check_passwords(&mut errors, &self.senha, &self.confirmar_senha);

        if let Some(placa) = self.placa.as_deref().filter(|p| !is_blank(p)) {
            if !validate_license_plate(placa) {
                errors.add("placa", MSG_PLATE_INVALID);
            }
        }

        errors.into_result()
    }
}

impl StationSignup {
    /// Collect every failing field, in form order.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if check_required(&mut errors, "cnpj", &self.cnpj, MSG_CNPJ_REQUIRED)
            && !validate_cnpj(&self.cnpj)
        {
            errors.add("cnpj", MSG_CNPJ_INVALID);
        }
        check_required(
            &mut errors,
            "nome_fantasia",
            &self.nome_fantasia,
            MSG_STATION_NAME_REQUIRED,
        );
        check_email(&mut errors, &self.email);
        check_phone(&mut errors, "telefone", &self.telefone, MSG_PHONE_REQUIRED);

        match &self.endereco {
            None => errors.add("endereco", MSG_ADDRESS_REQUIRED),
            Some(address) => {
                if !is_blank(&address.cep) && !crate::contact::validate_cep(&address.cep) {
                    errors.add("endereco.cep", MSG_CEP_INVALID);
                }
                if !is_blank(&address.uf) && !is_valid_uf(&address.uf) {
                    errors.add("endereco.uf", MSG_UF_INVALID);
                }
            }
        }

        check_required(&mut errors, "bandeira", &self.bandeira, MSG_BRAND_REQUIRED);
        check_required(
            &mut errors,
            "responsavel_nome",
            &self.responsavel_nome,
            MSG_MANAGER_NAME_REQUIRED,
        );
        check_phone(
            &mut errors,
            "responsavel_telefone",
            &self.responsavel_telefone,
            MSG_MANAGER_PHONE_REQUIRED,
        );
        check_passwords(&mut errors, &self.senha, &self.confirmar_senha);

        errors.into_result()
    }

    /// Profile labels still missing for this station.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing_station_fields(
            self.endereco.as_ref(),
            Some(self.bandeira.as_str()),
            self.localizacao.as_ref(),
        )
    }
}

/// Signup request, discriminated by role.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "role")]
pub enum SignupRequest {
    #[serde(rename = "motorista")]
    Driver(DriverSignup),
    #[serde(rename = "posto")]
    Station(StationSignup),
}

impl SignupRequest {
    pub fn role(&self) -> UserRole {
        match self {
            SignupRequest::Driver(_) => UserRole::Motorista,
            SignupRequest::Station(_) => UserRole::Posto,
        }
    }

    /// Normalized email
    pub fn email(&self) -> String {
        match self {
            SignupRequest::Driver(d) => normalize_email(&d.email),
            SignupRequest::Station(s) => normalize_email(&s.email),
        }
    }

    /// Plain text password as typed
    pub fn password(&self) -> &str {
        match self {
            SignupRequest::Driver(d) => &d.senha,
            SignupRequest::Station(s) => &s.senha,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        match self {
            SignupRequest::Driver(d) => d.validate(),
            SignupRequest::Station(s) => s.validate(),
        }
    }

    /// Build the record to persist. Documents are re-parsed into `Cpf` /
    /// `Cnpj`, so an unvalidated request fails here instead of being stored.
    pub fn into_new_profile(self, password_hash: HashedPassword) -> DomainResult<NewProfile> {
        let new = match self {
            SignupRequest::Driver(d) => NewProfile {
                role: UserRole::Motorista,
                email: normalize_email(&d.email),
                display_name: d.nome.trim().to_string(),
                document: Cpf::parse(&d.cpf)?.into(),
                phone: only_digits(&d.telefone),
                status: ProfileStatus::Active,
                license_plate: d
                    .placa
                    .filter(|p| !is_blank(p))
                    .map(|p| plate::normalize(&p)),
                brand: None,
                manager_name: None,
                manager_phone: None,
                address: None,
                location: None,
                password_hash,
            },
            SignupRequest::Station(s) => {
                let status = if s.missing_fields().is_empty() {
                    ProfileStatus::Pending
                } else {
                    ProfileStatus::Incomplete
                };
                NewProfile {
                    role: UserRole::Posto,
                    email: normalize_email(&s.email),
                    display_name: s.nome_fantasia.trim().to_string(),
                    document: Cnpj::parse(&s.cnpj)?.into(),
                    phone: only_digits(&s.telefone),
                    status,
                    license_plate: None,
                    brand: Some(s.bandeira.trim().to_string()),
                    manager_name: Some(s.responsavel_nome.trim().to_string()),
                    manager_phone: Some(only_digits(&s.responsavel_telefone)),
                    address: s.endereco,
                    location: s.localizacao,
                    password_hash,
                }
            }
        };
        Ok(new)
    }
}

/// A validated profile ready to be stored.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub role: UserRole,
    pub email: String,
    pub display_name: String,
    /// CPF or CNPJ digits
    pub document: String,
    pub phone: String,
    pub status: ProfileStatus,
    pub license_plate: Option<String>,
    pub brand: Option<String>,
    pub manager_name: Option<String>,
    pub manager_phone: Option<String>,
    pub address: Option<Address>,
    pub location: Option<Location>,
    pub password_hash: HashedPassword,
}

/// Stored profile
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub role: UserRole,
    pub email: String,
    pub display_name: String,
    pub document: String,
    pub phone: String,
    pub status: ProfileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing)]
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Assign an id and creation time to a new profile
    pub fn create(new: NewProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: new.role,
            email: new.email,
            display_name: new.display_name,
            document: new.document,
            phone: new.phone,
            status: new.status,
            license_plate: new.license_plate,
            brand: new.brand,
            manager_name: new.manager_name,
            manager_phone: new.manager_phone,
            address: new.address,
            location: new.location,
            password_hash: new.password_hash,
            created_at: Utc::now(),
        }
    }

    /// Missing station fields; always empty for drivers
    pub fn missing_fields(&self) -> Vec<&'static str> {
        match self.role {
            UserRole::Motorista => Vec::new(),
            UserRole::Posto => missing_station_fields(
                self.address.as_ref(),
                self.brand.as_deref(),
                self.location.as_ref(),
            ),
        }
    }
}

/// Profile response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProfileResponse {
    #[cfg_attr(feature = "openapi", schema(example = "550e8400-e29b-41d4-a716-446655440000"))]
    pub id: Uuid,
    pub role: UserRole,
    #[cfg_attr(feature = "openapi", schema(example = "maria@exemplo.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "Maria Silva"))]
    pub display_name: String,
    /// Masked CPF or CNPJ
    #[cfg_attr(feature = "openapi", schema(example = "111.444.777-35"))]
    pub document: String,
    /// Masked phone
    #[cfg_attr(feature = "openapi", schema(example = "(11) 98765-4321"))]
    pub phone: String,
    pub status: ProfileStatus,
    /// Station profile fields still to fill in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        let document = match profile.role {
            UserRole::Motorista => mask_cpf(&profile.document),
            UserRole::Posto => mask_cnpj(&profile.document),
        };
        Self {
            id: profile.id,
            role: profile.role,
            email: profile.email.clone(),
            display_name: profile.display_name.clone(),
            document,
            phone: mask_phone(&profile.phone),
            status: profile.status,
            missing_fields: profile
                .missing_fields()
                .into_iter()
                .map(String::from)
                .collect(),
            created_at: profile.created_at,
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        ProfileResponse::from(&profile)
    }
}
