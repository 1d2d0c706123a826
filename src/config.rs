//! Checklist configuration: rule props, appearance and password input.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::rule::RuleName;

pub const DEFAULT_MIN_LENGTH: usize = 6;
pub const DEFAULT_MAX_LENGTH: usize = 32;

/// Characters accepted by the `specialChar` rule when no custom pattern is set.
pub const DEFAULT_SPECIAL_CHARS: &str = "~`¿¡!#$%^&*€£@+÷=-[]\\';,/{}()|\":<>?._";

pub const DEFAULT_MESSAGE_ONLY_PREFIX: &str = "New password must contain at least:";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid special characters pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("Props file not found: {0}")]
    FileNotFound(std::path::PathBuf),
    #[error("Failed to read props file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Props file is empty")]
    EmptyFile,
    #[error("Failed to parse props file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Matcher used by the `specialChar` rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum SpecialChars {
    /// The built-in character list, [`DEFAULT_SPECIAL_CHARS`].
    #[default]
    Default,
    /// A caller supplied pattern; a value passes if it matches anywhere.
    Pattern(Regex),
}

impl SpecialChars {
    /// Compiles a custom pattern, failing on invalid syntax.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        Ok(SpecialChars::Pattern(Regex::new(pattern)?))
    }

    /// Compiles a custom pattern, falling back to the default list when it is invalid.
    pub fn parse_or_default(pattern: &str) -> Self {
        match Self::new(pattern) {
            Ok(matcher) => matcher,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Ignoring special characters pattern, using defaults: {}", _e);
                SpecialChars::Default
            }
        }
    }

    pub fn is_match(&self, value: &str) -> bool {
        match self {
            SpecialChars::Default => value.chars().any(|c| DEFAULT_SPECIAL_CHARS.contains(c)),
            SpecialChars::Pattern(re) => re.is_match(value),
        }
    }

    pub fn pattern(&self) -> Option<&str> {
        match self {
            SpecialChars::Default => None,
            SpecialChars::Pattern(re) => Some(re.as_str()),
        }
    }
}

impl PartialEq for SpecialChars {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern()
    }
}

impl From<Option<String>> for SpecialChars {
    fn from(pattern: Option<String>) -> Self {
        pattern
            .map(|p| SpecialChars::parse_or_default(&p))
            .unwrap_or_default()
    }
}

impl From<SpecialChars> for Option<String> {
    fn from(matcher: SpecialChars) -> Self {
        matcher.pattern().map(str::to_string)
    }
}

/// Custom icon markup shown instead of the built-in check and cross.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconComponents {
    pub valid_icon: String,
    pub invalid_icon: String,
}

/// Presentation-only options. None of these affect rule validity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Appearance {
    pub class_name: Option<String>,
    /// Inline style appended to the container's own style.
    pub style: Option<String>,
    pub item_class_name: Option<String>,
    pub rtl: bool,
    pub hide_icon: bool,
    pub icon_size: u32,
    pub icon_components: Option<IconComponents>,
    pub valid_color: String,
    pub invalid_color: String,
    pub valid_text_color: Option<String>,
    pub invalid_text_color: Option<String>,
    pub render_as_messages_only: bool,
    pub message_only_prefix: String,
    pub message_only_color: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            class_name: None,
            style: None,
            item_class_name: None,
            rtl: false,
            hide_icon: false,
            icon_size: 18,
            icon_components: None,
            valid_color: "#4BCA81".to_string(),
            invalid_color: "#FF0033".to_string(),
            valid_text_color: None,
            invalid_text_color: None,
            render_as_messages_only: false,
            message_only_prefix: DEFAULT_MESSAGE_ONLY_PREFIX.to_string(),
            message_only_color: "red".to_string(),
        }
    }
}

/// Everything the checklist is configured with, except the password itself.
///
/// Field names follow the camelCase props spelling so a props file can be
/// deserialized directly:
///
/// ```rust
/// use pwd_checklist::{ChecklistProps, RuleName};
///
/// let props: ChecklistProps = serde_json::from_str(
///     r#"{
///         "rules": ["minLength", "number"],
///         "minLength": 8,
///         "messages": { "number": "Add a digit" }
///     }"#,
/// ).unwrap();
///
/// assert_eq!(props.min_length, 8);
/// assert_eq!(props.message_override(RuleName::Number), Some("Add a digit"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChecklistProps {
    /// Requested rules, in display order. Unknown names are ignored.
    pub rules: Vec<String>,
    pub min_length: usize,
    pub max_length: usize,
    #[serde(rename = "specialCharsRegex")]
    pub special_chars: SpecialChars,
    pub messages: BTreeMap<RuleName, String>,
    #[serde(flatten)]
    pub appearance: Appearance,
}

impl Default for ChecklistProps {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            special_chars: SpecialChars::Default,
            messages: BTreeMap::new(),
            appearance: Appearance::default(),
        }
    }
}

impl ChecklistProps {
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rules: rules.into_iter().map(|r| r.as_ref().to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn special_chars(mut self, special_chars: SpecialChars) -> Self {
        self.special_chars = special_chars;
        self
    }

    pub fn message(mut self, rule: RuleName, text: impl Into<String>) -> Self {
        self.messages.insert(rule, text.into());
        self
    }

    pub fn messages_only(mut self, prefix: impl Into<String>) -> Self {
        self.appearance.render_as_messages_only = true;
        self.appearance.message_only_prefix = prefix.into();
        self
    }

    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Returns the caller's text for `rule`, if a non-empty one was set.
    pub fn message_override(&self, rule: RuleName) -> Option<&str> {
        self.messages
            .get(&rule)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }
}

/// The password and its confirmation, as typed by the user.
pub struct PasswordInput {
    value: SecretString,
    value_again: Option<SecretString>,
}

impl PasswordInput {
    pub fn new(value: SecretString) -> Self {
        Self {
            value,
            value_again: None,
        }
    }

    pub fn with_again(mut self, value_again: SecretString) -> Self {
        self.value_again = Some(value_again);
        self
    }

    pub(crate) fn value(&self) -> &str {
        self.value.expose_secret()
    }

    pub(crate) fn value_again(&self) -> Option<&str> {
        self.value_again.as_ref().map(|v| v.expose_secret())
    }
}

impl Default for PasswordInput {
    fn default() -> Self {
        Self::new(SecretString::new(String::new().into()))
    }
}

impl fmt::Debug for PasswordInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordInput")
            .field("value", &"[REDACTED]")
            .field("has_value_again", &self.value_again.is_some())
            .finish()
    }
}
