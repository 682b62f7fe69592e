//! Digit extraction and progressive masking shared by every document format.

/// Strip every non-digit character.
pub fn only_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Numeric values of the ASCII digits in `digits`.
pub(crate) fn digit_values(digits: &str) -> Vec<u32> {
    digits.bytes().map(|b| u32::from(b - b'0')).collect()
}

/// True when every character equals the first one (e.g. "00000000000").
pub(crate) fn is_repeated(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Extract at most `max_len` digits and insert each separator right before the
/// digit at its offset, provided that digit exists.
///
/// Partial input gets a partial mask: `("1234", [(3, ".")])` renders `123.4`,
/// while `("123", [(3, ".")])` stays `123`.
pub(crate) fn mask_digits(input: &str, max_len: usize, separators: &[(usize, &str)]) -> String {
    let digits: String = only_digits(input).chars().take(max_len).collect();
    apply_separators(&digits, separators)
}

pub(crate) fn apply_separators(digits: &str, separators: &[(usize, &str)]) -> String {
    let mut out = String::with_capacity(digits.len() + separators.len() * 2);
    for (i, c) in digits.chars().enumerate() {
        if let Some((_, sep)) = separators.iter().find(|(offset, _)| *offset == i) {
            out.push_str(sep);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_digits_strips_punctuation() {
        assert_eq!(only_digits("111.444.777-35"), "11144477735");
        assert_eq!(only_digits("abc"), "");
        assert_eq!(only_digits("(11) 9 8765-4321"), "11987654321");
    }

    #[test]
    fn test_is_repeated() {
        assert!(is_repeated("00000000000"));
        assert!(!is_repeated("00000000001"));
        assert!(!is_repeated(""));
    }

    #[test]
    fn test_mask_digits_is_progressive() {
        let seps = [(3, "."), (6, "-")];
        assert_eq!(mask_digits("", 8, &seps), "");
        assert_eq!(mask_digits("123", 8, &seps), "123");
        assert_eq!(mask_digits("1234", 8, &seps), "123.4");
        assert_eq!(mask_digits("1234567", 8, &seps), "123.456-7");
    }

    #[test]
    fn test_mask_digits_truncates() {
        assert_eq!(mask_digits("123456789", 4, &[(2, "/")]), "12/34");
    }
}
