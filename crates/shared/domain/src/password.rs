//! Password strength rules and the hashed-password value object.
//!
//! Strength checking returns every unmet rule so a form can render one line
//! of feedback per rule. Hashing uses Argon2 with default parameters.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::Serialize;

use crate::constants::{
    MIN_PASSWORD_LENGTH, MSG_PASSWORD_DIGIT, MSG_PASSWORD_MIN_LENGTH, MSG_PASSWORD_UPPERCASE,
};
use crate::error::{DomainError, DomainResult};

/// Outcome of a password strength check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PasswordCheck {
    pub is_valid: bool,
    /// Unmet rules, in rule order
    pub errors: Vec<String>,
}

/// Check a password against every strength rule.
///
/// Rules: at least 8 characters, one ASCII uppercase letter, one digit.
pub fn validate_password(password: &str) -> PasswordCheck {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(MSG_PASSWORD_MIN_LENGTH.to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(MSG_PASSWORD_UPPERCASE.to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(MSG_PASSWORD_DIGIT.to_string());
    }

    PasswordCheck {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Argon2 hash of a password that passed the strength rules.
#[derive(Clone)]
pub struct HashedPassword {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl HashedPassword {
    /// Check strength rules, then hash.
    ///
    /// # Errors
    /// `DomainError::Password` listing every unmet rule.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        let check = validate_password(plain_text);
        if !check.is_valid {
            return Err(DomainError::password(check.errors.join(", ")));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap an existing hash (e.g. loaded from storage).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
