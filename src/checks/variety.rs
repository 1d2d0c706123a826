//! Character variety checks - digits, letters, letter case and special characters.

use crate::config::SpecialChars;

pub fn has_number(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

pub fn has_letter(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_alphabetic())
}

/// True if some character changes under lowercasing but not under uppercasing.
pub fn has_capital(value: &str) -> bool {
    value
        .chars()
        .any(|c| !c.to_lowercase().eq([c]) && c.to_uppercase().eq([c]))
}

/// True if some character changes under uppercasing but not under lowercasing.
pub fn has_lowercase(value: &str) -> bool {
    value
        .chars()
        .any(|c| !c.to_uppercase().eq([c]) && c.to_lowercase().eq([c]))
}

pub fn has_special_char(value: &str, special_chars: &SpecialChars) -> bool {
    special_chars.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        assert!(has_number("abc1"));
        assert!(!has_number("abc"));
        assert!(!has_number("٣"));
    }

    #[test]
    fn test_letter_is_ascii_only() {
        assert!(has_letter("i have a letter"));
        assert!(has_letter("I HAVE A LETTER"));
        assert!(!has_letter("1234"));
        assert!(!has_letter("ñé"));
    }

    #[test]
    fn test_capital() {
        assert!(!has_capital("as;lkj23408"));
        assert!(has_capital("s;lKj23408"));
        assert!(has_capital("Ñ"));
        assert!(!has_capital("1234!"));
    }

    #[test]
    fn test_lowercase() {
        assert!(!has_lowercase("I'M ALL CAPITALS 1234"));
        assert!(has_lowercase("I HAVE a LOWERCASE LETTER 1234"));
        assert!(!has_lowercase(""));
    }

    #[test]
    fn test_default_special_chars() {
        let matcher = SpecialChars::default();
        for value in ["!", "@", ".", "_", "¿", "¡", "÷", "€", "£", "(", ")"] {
            assert!(has_special_char(value, &matcher), "{value} should pass");
        }
        assert!(!has_special_char("", &matcher));
        assert!(!has_special_char("abc 123", &matcher));
    }

    #[test]
    fn test_custom_special_chars_pattern() {
        let anything = SpecialChars::new(r"[\s\S]").unwrap();
        assert!(has_special_char("1234567812345678", &anything));

        let whitespace = SpecialChars::new(r"[\s]").unwrap();
        assert!(!has_special_char("1234567812345678", &whitespace));
    }
}
