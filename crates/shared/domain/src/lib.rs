//! Domain layer - Brazilian document validation and signup entities.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Every validator is a total function: malformed input yields `false` (or an
//! itemised error list) and every mask returns a best-effort partial format,
//! so they can run on each keystroke.

pub mod address;
pub mod constants;
pub mod contact;
pub mod digits;
pub mod document;
pub mod error;
pub mod password;
pub mod plate;
pub mod signup;

pub use address::{missing_station_fields, Address, Location};
pub use constants::*;
pub use contact::{mask_cep, mask_phone, validate_cep, validate_email, validate_phone};
pub use digits::only_digits;
pub use document::{mask_cnpj, mask_cpf, validate_cnpj, validate_cpf, Cnpj, Cpf};
pub use error::{DomainError, DomainResult, FieldError, FieldErrors};
pub use password::{validate_password, HashedPassword, PasswordCheck};
pub use plate::{mask_license_plate, validate_license_plate};
pub use signup::{
    normalize_email, DriverSignup, NewProfile, Profile, ProfileResponse, ProfileStatus,
    SignupRequest, StationSignup, UserRole,
};
