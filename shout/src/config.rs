//! Extension configuration structures for serialization/deserialization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root extension configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Settings for the registered command
    #[serde(default)]
    pub command: CommandConfig,
}

/// How the uppercase command is presented to the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Name the command is registered under
    #[serde(default = "default_command_name")]
    pub name: String,

    /// Description shown in the host's command palette
    #[serde(default = "default_command_description")]
    pub description: String,
}

fn default_command_name() -> String {
    "ToUppercase".to_string()
}

fn default_command_description() -> String {
    "Convert every line of the active document to uppercase".to_string()
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            name: default_command_name(),
            description: default_command_description(),
        }
    }
}

impl Config {
    /// Parse a config from the TOML string the host hands over.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

/// Errors from loading an extension config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML did not parse or did not match the config shape.
    #[error("invalid extension config: {0}")]
    Parse(#[from] toml::de::Error),
}
