//! Rule names - the closed set of checks the checklist knows about.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name of a checklist rule.
///
/// The textual form is the camelCase spelling used in props files
/// (`"minLength"`, `"capitalAndLowercase"`, `"match"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleName {
    MinLength,
    MaxLength,
    SpecialChar,
    Number,
    Capital,
    Lowercase,
    CapitalAndLowercase,
    Letter,
    NotEmpty,
    NoSpaces,
    Match,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown rule name: {0}")]
pub struct UnknownRule(pub String);

impl RuleName {
    /// Every rule, in catalog order.
    pub const ALL: [RuleName; 11] = [
        RuleName::MinLength,
        RuleName::MaxLength,
        RuleName::SpecialChar,
        RuleName::Number,
        RuleName::Capital,
        RuleName::Lowercase,
        RuleName::CapitalAndLowercase,
        RuleName::Letter,
        RuleName::NotEmpty,
        RuleName::NoSpaces,
        RuleName::Match,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleName::MinLength => "minLength",
            RuleName::MaxLength => "maxLength",
            RuleName::SpecialChar => "specialChar",
            RuleName::Number => "number",
            RuleName::Capital => "capital",
            RuleName::Lowercase => "lowercase",
            RuleName::CapitalAndLowercase => "capitalAndLowercase",
            RuleName::Letter => "letter",
            RuleName::NotEmpty => "notEmpty",
            RuleName::NoSpaces => "noSpaces",
            RuleName::Match => "match",
        }
    }

    /// Position of the rule inside [`RuleName::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for RuleName {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for RuleName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        for rule in RuleName::ALL {
            assert_eq!(rule.as_str().parse::<RuleName>(), Ok(rule));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "MinLength".parse::<RuleName>(),
            Err(UnknownRule("MinLength".to_string()))
        );
        assert!("minlength".parse::<RuleName>().is_err());
    }

    #[test]
    fn test_index_matches_catalog_order() {
        for (i, rule) in RuleName::ALL.into_iter().enumerate() {
            assert_eq!(rule.index(), i);
        }
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&RuleName::CapitalAndLowercase).unwrap();
        assert_eq!(json, "\"capitalAndLowercase\"");

        let rule: RuleName = serde_json::from_str("\"noSpaces\"").unwrap();
        assert_eq!(rule, RuleName::NoSpaces);
    }
}
