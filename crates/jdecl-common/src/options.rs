//! Emission options.
//!
//! Options are read from a JSON file whose keys are camelCase, e.g.
//!
//! ```json
//! {
//!   "nullability": true,
//!   "staticAccessorMethods": "true",
//!   "prefixes": { "com.example.util": "CEU" }
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Custom deserializer for boolean options that accepts both bool and string values.
/// This handles config files that contain `"nullability": "true"` instead of `true`.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::String(s) => {
            let normalized = s.trim().to_lowercase();
            match normalized.as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(Error::custom(format!(
                    "invalid boolean value: '{}'. Expected true, false, 'true', or 'false'",
                    s
                ))),
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeclarationOptions {
    /// Emit nullability attributes on properties, parameters and enum accessors.
    #[serde(deserialize_with = "deserialize_bool_or_string")]
    pub nullability: bool,
    /// Declare class-level accessor methods for static fields.
    #[serde(deserialize_with = "deserialize_bool_or_string")]
    pub static_accessor_methods: bool,
    /// Swift-friendly output; implies nullability and static accessors.
    #[serde(deserialize_with = "deserialize_bool_or_string")]
    pub swift_friendly: bool,
    /// Mark `@Deprecated` declarations with the deprecated attribute.
    #[serde(deserialize_with = "deserialize_bool_or_string")]
    pub generate_deprecated_declarations: bool,
    /// Package name -> type-name prefix used instead of the camel-cased package.
    pub prefixes: BTreeMap<String, String>,
}

impl DeclarationOptions {
    pub fn nullability(&self) -> bool {
        self.nullability || self.swift_friendly
    }

    pub fn static_accessor_methods(&self) -> bool {
        self.static_accessor_methods || self.swift_friendly
    }

    pub fn generate_deprecated_declarations(&self) -> bool {
        self.generate_deprecated_declarations
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|err| ConfigError::Parse {
            path: None,
            message: err.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|err| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            message: err.to_string(),
        })
    }

    /// Parse a `package=PREFIX` command-line mapping and add it.
    pub fn add_prefix_mapping(&mut self, mapping: &str) -> Result<(), ConfigError> {
        let Some((package, prefix)) = mapping.split_once('=') else {
            return Err(ConfigError::InvalidPrefix(mapping.to_string()));
        };
        let (package, prefix) = (package.trim(), prefix.trim());
        if package.is_empty() || prefix.is_empty() {
            return Err(ConfigError::InvalidPrefix(mapping.to_string()));
        }
        self.prefixes.insert(package.to_string(), prefix.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io { path: PathBuf, message: String },
    Parse { path: Option<PathBuf>, message: String },
    InvalidPrefix(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "failed to read config {}: {message}", path.display())
            }
            ConfigError::Parse {
                path: Some(path),
                message,
            } => write!(f, "invalid config {}: {message}", path.display()),
            ConfigError::Parse {
                path: None,
                message,
            } => write!(f, "invalid config: {message}"),
            ConfigError::InvalidPrefix(mapping) => {
                write!(f, "invalid prefix mapping '{mapping}', expected package=PREFIX")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
