//! Props file loading
//!
//! Reads [`ChecklistProps`] from a JSON file on disk.

use std::path::{Path, PathBuf};

use crate::config::{ChecklistProps, ConfigError, SpecialChars};

/// Returns the props file path.
///
/// Priority:
/// 1. Environment variable `PWD_CHECKLIST_PROPS_PATH`
/// 2. Default path `./assets/checklist.json`
pub fn get_props_path() -> PathBuf {
    std::env::var("PWD_CHECKLIST_PROPS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/checklist.json"))
}

/// Loads props from the file named by [`get_props_path`].
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
/// - File is not valid props JSON
/// - `specialCharsRegex` is set but does not compile
pub fn load_props() -> Result<ChecklistProps, ConfigError> {
    load_props_from_path(get_props_path())
}

/// Loads props from a specific file path.
///
/// Unlike plain deserialization, which silently falls back to the default
/// special characters, an invalid `specialCharsRegex` here is an error.
///
/// # Example
///
/// ```rust,ignore
/// let props = pwd_checklist::load_props_from_path("/etc/myapp/checklist.json")?;
/// ```
pub fn load_props_from_path<P: AsRef<Path>>(path: P) -> Result<ChecklistProps, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Props loading FAILED: FileNotFound {:?}", path);
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Props loading FAILED: Empty file {:?}", path);
        return Err(ConfigError::EmptyFile);
    }

    let raw: serde_json::Value = serde_json::from_str(&content)?;
    if let Some(pattern) = raw.get("specialCharsRegex").and_then(|p| p.as_str()) {
        SpecialChars::new(pattern)?;
    }
    let props: ChecklistProps = serde_json::from_value(raw)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Props loaded: {} rules from {:?}", props.rules.len(), path);

    Ok(props)
}
