//! Single-value checks shared by the `/validation` endpoints and the
//! `gateway check` command.

use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

use common::AppError;
use domain::{
    mask_cep, mask_cnpj, mask_cpf, mask_license_plate, mask_phone, validate_cep, validate_cnpj,
    validate_cpf, validate_email, validate_license_plate, validate_password, validate_phone,
};

/// Kind of value to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ValueKind {
    Cpf,
    Cnpj,
    Email,
    Phone,
    Cep,
    Plate,
    Password,
}

impl FromStr for ValueKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpf" => Ok(ValueKind::Cpf),
            "cnpj" => Ok(ValueKind::Cnpj),
            "email" => Ok(ValueKind::Email),
            "phone" => Ok(ValueKind::Phone),
            "cep" => Ok(ValueKind::Cep),
            "plate" => Ok(ValueKind::Plate),
            "password" => Ok(ValueKind::Password),
            _ => Err(AppError::NotFound),
        }
    }
}

/// Outcome of checking one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValueCheck {
    pub valid: bool,
    /// Display format; absent for kinds without a mask
    #[schema(example = "111.444.777-35")]
    pub masked: Option<String>,
}

/// Validate and mask `value` as the given kind.
///
/// Passwords are never echoed back, so `masked` is always `None` for them.
pub fn check_value(kind: ValueKind, value: &str) -> ValueCheck {
    let (valid, masked) = match kind {
        ValueKind::Cpf => (validate_cpf(value), Some(mask_cpf(value))),
        ValueKind::Cnpj => (validate_cnpj(value), Some(mask_cnpj(value))),
        ValueKind::Email => (validate_email(value), None),
        ValueKind::Phone => (validate_phone(value), Some(mask_phone(value))),
        ValueKind::Cep => (validate_cep(value), Some(mask_cep(value))),
        ValueKind::Plate => (
            validate_license_plate(value),
            Some(mask_license_plate(value)),
        ),
        ValueKind::Password => (validate_password(value).is_valid, None),
    };
    ValueCheck { valid, masked }
}
