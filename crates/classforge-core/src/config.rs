//! Generator configuration types

use crate::error::ClassGenResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings that shape generated output without being part of a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// One level of indentation inside the class body
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Directory holding a `ClassTemplate.java.tmpl` that replaces the
    /// built-in template
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_indent() -> String {
    "    ".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            template_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ClassGenResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text; an empty document yields defaults
    pub fn from_toml(content: &str) -> ClassGenResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Override the indentation unit
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Override the template directory
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }
}
