//! Vehicle license plates: classic `AAA9999` and Mercosul `AAA9A99`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::LICENSE_PLATE_LENGTH;

static CLASSIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{4}$").expect("classic plate pattern compiles"));

static MERCOSUL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9][A-Z][0-9]{2}$").expect("mercosul plate pattern compiles"));

static DASH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]{3})([0-9A-Z])").expect("plate dash pattern compiles"));

pub(crate) fn normalize(plate: &str) -> String {
    plate
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Accepts either plate shape, ignoring case and punctuation.
pub fn validate_license_plate(plate: &str) -> bool {
    let clean = normalize(plate);
    CLASSIC_RE.is_match(&clean) || MERCOSUL_RE.is_match(&clean)
}

/// Format a (possibly partial) plate as `ABC-1234` / `ABC-1D23`.
///
/// The dash goes after the first run of three letters followed by another
/// character, wherever it starts.
pub fn mask_license_plate(value: &str) -> String {
    let clean: String = normalize(value).chars().take(LICENSE_PLATE_LENGTH).collect();
    DASH_RE.replacen(&clean, 1, "$1-$2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_plate() {
        assert!(validate_license_plate("ABC1234"));
        assert!(validate_license_plate("abc-1234"));
    }

    #[test]
    fn test_mercosul_plate() {
        assert!(validate_license_plate("ABC1D23"));
        assert!(validate_license_plate("abc 1d23"));
    }

    #[test]
    fn test_invalid_plates() {
        assert!(!validate_license_plate(""));
        assert!(!validate_license_plate("AB12345"));
        assert!(!validate_license_plate("ABC12345"));
        assert!(!validate_license_plate("ABCD123"));
    }

    #[test]
    fn test_mask_license_plate() {
        assert_eq!(mask_license_plate("abc"), "ABC");
        assert_eq!(mask_license_plate("abc1"), "ABC-1");
        assert_eq!(mask_license_plate("abc1d23"), "ABC-1D23");
        assert_eq!(mask_license_plate("ABC-1234-99"), "ABC-1234");
    }

    #[test]
    fn test_mask_dash_follows_first_letter_run() {
        assert_eq!(mask_license_plate("1abcd"), "1ABC-D");
        assert_eq!(mask_license_plate("ab1cd"), "AB1CD");
        assert_eq!(mask_license_plate("abcdefg"), "ABC-DEFG");
    }
}
