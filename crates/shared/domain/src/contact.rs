//! Contact fields: email, Brazilian phone numbers and postal codes (CEP).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{CEP_LENGTH, PHONE_LANDLINE_LENGTH, PHONE_MOBILE_LENGTH};
use crate::digits::{apply_separators, mask_digits, only_digits};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Syntactic email check. No DNS or mailbox verification.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Landline (10 digits) or mobile (11 digits), area code included.
pub fn validate_phone(phone: &str) -> bool {
    let len = only_digits(phone).len();
    len == PHONE_LANDLINE_LENGTH || len == PHONE_MOBILE_LENGTH
}

/// Postal code with exactly 8 digits.
pub fn validate_cep(cep: &str) -> bool {
    only_digits(cep).len() == CEP_LENGTH
}

/// Format a (possibly partial) phone number.
///
/// Up to 10 digits renders as `(DD) DDDD-DDDD`, 11 digits as
/// `(DD) DDDDD-DDDD`. Anything past 11 digits is dropped.
pub fn mask_phone(value: &str) -> String {
    let digits: String = only_digits(value)
        .chars()
        .take(PHONE_MOBILE_LENGTH)
        .collect();
    if digits.len() < 3 {
        return digits;
    }

    // offset of the dash inside the subscriber number
    let dash_at = if digits.len() <= PHONE_LANDLINE_LENGTH { 4 } else { 5 };
    let (area, number) = digits.split_at(2);
    format!("({}) {}", area, apply_separators(number, &[(dash_at, "-")]))
}

/// Format a (possibly partial) CEP as `00000-000`.
pub fn mask_cep(value: &str) -> String {
    mask_digits(value, CEP_LENGTH, &[(5, "-")])
}
