//! Brazilian tax identifiers: CPF (individuals) and CNPJ (companies).
//!
//! Both formats end in two modulus-11 check digits computed from the digits
//! before them. Validation strips punctuation first, so `111.444.777-35` and
//! `11144477735` are the same document.

use serde::{Deserialize, Serialize};

use crate::constants::{CNPJ_LENGTH, CPF_LENGTH};
use crate::digits::{digit_values, is_repeated, mask_digits, only_digits};
use crate::error::{DomainError, DomainResult};

const CPF_SEPARATORS: &[(usize, &str)] = &[(3, "."), (6, "."), (9, "-")];
const CNPJ_SEPARATORS: &[(usize, &str)] = &[(2, "."), (5, "."), (8, "/"), (12, "-")];

/// CPF check digit over the first `len` digits, weights `len + 1` down to 2.
fn cpf_check_digit(digits: &[u32], len: usize) -> u32 {
    let sum: u32 = digits[..len]
        .iter()
        .enumerate()
        .map(|(i, d)| d * (len as u32 + 1 - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}

/// CNPJ check digit over the first `len` digits, walking right to left with
/// weights cycling 2..=9.
fn cnpj_check_digit(digits: &[u32], len: usize) -> u32 {
    let mut sum = 0;
    let mut weight = 2;
    for d in digits[..len].iter().rev() {
        sum += d * weight;
        weight = if weight == 9 { 2 } else { weight + 1 };
    }
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Validate a CPF, with or without punctuation.
pub fn validate_cpf(cpf: &str) -> bool {
    let clean = only_digits(cpf);
    if clean.len() != CPF_LENGTH || is_repeated(&clean) {
        return false;
    }

    let digits = digit_values(&clean);
    cpf_check_digit(&digits, 9) == digits[9] && cpf_check_digit(&digits, 10) == digits[10]
}

/// Validate a CNPJ, with or without punctuation.
pub fn validate_cnpj(cnpj: &str) -> bool {
    let clean = only_digits(cnpj);
    if clean.len() != CNPJ_LENGTH || is_repeated(&clean) {
        return false;
    }

    let digits = digit_values(&clean);
    cnpj_check_digit(&digits, 12) == digits[12] && cnpj_check_digit(&digits, 13) == digits[13]
}

/// Format a (possibly partial) CPF as `000.000.000-00`.
pub fn mask_cpf(value: &str) -> String {
    mask_digits(value, CPF_LENGTH, CPF_SEPARATORS)
}

/// Format a (possibly partial) CNPJ as `00.000.000/0000-00`.
pub fn mask_cnpj(value: &str) -> String {
    mask_digits(value, CNPJ_LENGTH, CNPJ_SEPARATORS)
}

/// A CPF known to be valid. Holds the bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Parse raw input (masked or not).
    pub fn parse(input: &str) -> DomainResult<Self> {
        if validate_cpf(input) {
            Ok(Self(only_digits(input)))
        } else {
            Err(DomainError::validation(crate::constants::MSG_CPF_INVALID))
        }
    }

    /// Bare digits, as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form, e.g. `111.444.777-35`.
    pub fn masked(&self) -> String {
        mask_cpf(&self.0)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cpf::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.masked())
    }
}

/// A CNPJ known to be valid. Holds the bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Parse raw input (masked or not).
    pub fn parse(input: &str) -> DomainResult<Self> {
        if validate_cnpj(input) {
            Ok(Self(only_digits(input)))
        } else {
            Err(DomainError::validation(crate::constants::MSG_CNPJ_INVALID))
        }
    }

    /// Bare digits, as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form, e.g. `11.222.333/0001-81`.
    pub fn masked(&self) -> String {
        mask_cnpj(&self.0)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cnpj::parse(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.masked())
    }
}
