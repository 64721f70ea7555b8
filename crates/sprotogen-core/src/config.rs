//! Generator configuration

use crate::error::ConfigError;
use crate::host::{Go, HostLanguage, Rust};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Target language of the generated source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    Go,
    Rust,
}

impl TargetLanguage {
    /// Host profile used by the mapping rules
    pub fn host(self) -> &'static dyn HostLanguage {
        match self {
            TargetLanguage::Go => &Go,
            TargetLanguage::Rust => &Rust,
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host().name())
    }
}

impl FromStr for TargetLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "go" | "golang" => Ok(TargetLanguage::Go),
            "rust" | "rs" => Ok(TargetLanguage::Rust),
            other => Err(ConfigError::Invalid(format!(
                "unsupported target language: {other}"
            ))),
        }
    }
}

/// Generation parameters for one schema file
///
/// Usually read from a `sprotogen.toml` next to the schema:
///
/// ```toml
/// namespace = "net"
/// lang = "go"
/// register = true
/// output = "net/proto.go"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Package (Go) or module (Rust) name, also the prefix of qualified names
    #[serde(default)]
    pub namespace: String,

    /// Target language
    #[serde(default)]
    pub lang: TargetLanguage,

    /// Emit registration glue for the codec-registration runtime
    #[serde(default)]
    pub register: bool,

    /// Run the language formatter over the rendered source
    #[serde(default = "default_format")]
    pub format: bool,

    /// Destination of the generated source (stdout when unset)
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_format() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            lang: TargetLanguage::default(),
            register: false,
            format: default_format(),
            output: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration for a namespace
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Invalid(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.is_empty() {
            return Err(ConfigError::Invalid("namespace cannot be empty".into()));
        }
        if self.namespace.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "namespace cannot contain whitespace: {:?}",
                self.namespace
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
