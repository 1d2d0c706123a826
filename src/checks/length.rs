//! Length checks - minimum and maximum password length.

/// Length of a value in UTF-16 code units, the unit browsers count
/// `maxlength` and string length in. Astral characters count twice.
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn min_length_check(value: &str, min_length: usize) -> bool {
    utf16_len(value) >= min_length
}

pub fn max_length_check(value: &str, max_length: usize) -> bool {
    utf16_len(value) <= max_length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_too_short() {
        assert!(!min_length_check("12345", 6));
    }

    #[test]
    fn test_min_length_exactly_minimum() {
        assert!(min_length_check("123456", 6));
    }

    #[test]
    fn test_max_length_boundaries() {
        assert!(max_length_check("1234567812345678", 16));
        assert!(!max_length_check("12345678123456789", 16));
    }

    #[test]
    fn test_empty_value_passes_max_length() {
        assert!(max_length_check("", 0));
        assert!(!min_length_check("", 1));
        assert!(min_length_check("", 0));
    }

    #[test]
    fn test_length_counts_utf16_units_not_bytes() {
        assert_eq!(utf16_len("€£÷"), 3);
        assert!(min_length_check("ñññññ€", 6));
    }

    #[test]
    fn test_astral_chars_count_as_two() {
        assert_eq!(utf16_len("😀😀😀"), 6);
        assert!(min_length_check("😀😀😀", 6));
        assert!(!max_length_check("😀😀😀", 5));
    }
}
