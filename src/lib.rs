//! Password rule checklist library
//!
//! This library evaluates a password (and its confirmation) against a set of
//! named rules and renders either a pass/fail checklist or a single condensed
//! message.
//!
//! # Features
//!
//! - `async` (default): Enables forwarding change notifications into a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_CHECKLIST_PROPS_PATH`: Custom path to the props file read by [`load_props`]
//!   (default: `./assets/checklist.json`)
//!
//! # Example
//!
//! ```rust
//! use pwd_checklist::{ChecklistProps, PasswordChecklist, PasswordInput};
//! use secrecy::SecretString;
//!
//! let props = ChecklistProps::new(["minLength", "specialChar", "number", "match"]);
//! let mut checklist = PasswordChecklist::new(props);
//! checklist.on_change(|is_valid, failed| println!("valid: {is_valid}, failed: {failed:?}"));
//!
//! let input = PasswordInput::new(SecretString::new("MyP@ssw0rd!".to_string().into()))
//!     .with_again(SecretString::new("MyP@ssw0rd!".to_string().into()));
//!
//! let rendered = checklist.update(&input);
//! assert!(checklist.is_valid());
//! println!("{}", rendered.to_html());
//! ```

// Internal modules
mod catalog;
mod checklist;
mod checks;
mod config;
mod engine;
mod props_file;
mod render;
mod rule;

// Public API
pub use catalog::{RuleCatalog, RuleOutcome};
pub use checklist::PasswordChecklist;
pub use config::{
    Appearance, ChecklistProps, ConfigError, IconComponents, PasswordInput, SpecialChars,
    DEFAULT_MAX_LENGTH, DEFAULT_MESSAGE_ONLY_PREFIX, DEFAULT_MIN_LENGTH, DEFAULT_SPECIAL_CHARS,
};
pub use engine::{
    ChangeListener, ChecklistChange, ChecklistEngine, EvaluationResult, condensed_message,
    enabled_rules, evaluate_checklist,
};
pub use props_file::{get_props_path, load_props, load_props_from_path};
pub use render::{ChecklistView, MessageView, Rendered, RowIcon, RuleRow, render};
pub use rule::{RuleName, UnknownRule};
