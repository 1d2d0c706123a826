//! Field checks - presence, whitespace and confirmation match.

pub fn not_empty_check(value: &str, value_again: Option<&str>) -> bool {
    !value.is_empty() && value_again.is_some_and(|again| !again.is_empty())
}

pub fn no_spaces_check(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

/// Exact, case-sensitive comparison with the confirmation field.
pub fn match_check(value: &str, value_again: Option<&str>) -> bool {
    !value.is_empty() && value_again == Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(!not_empty_check("", None));
        assert!(!not_empty_check("1", Some("")));
        assert!(!not_empty_check("1", None));
        assert!(!not_empty_check("", Some("1")));
        assert!(not_empty_check("0", Some("1")));
    }

    #[test]
    fn test_no_spaces() {
        assert!(no_spaces_check("Idonthavespaces"));
        assert!(!no_spaces_check(""));
        for value in [
            "I have spaces",
            "ihave\tatabspace",
            "Ihave\nanewline",
            "Ihaveacarriage\rreturn",
            "Ihavea\x0cformfeed",
        ] {
            assert!(!no_spaces_check(value), "{value:?} should fail");
        }
    }

    #[test]
    fn test_match() {
        assert!(match_check("test", Some("test")));
        assert!(!match_check("", Some("")));
        assert!(!match_check("1", Some("2")));
        assert!(!match_check("Test", Some("test")));
        assert!(!match_check("test", None));
    }
}
