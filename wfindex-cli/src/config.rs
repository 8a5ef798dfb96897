//! Host configuration file.
//!
//! ```yaml
//! languages:
//!   enabled: [SMK, SWL]
//! format: json
//! max_file_size: 1048576
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use wfindex::RegistryConfig;

use crate::output::OutputFormat;
use crate::reader::DEFAULT_MAX_FILE_SIZE;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Which workflow languages the registry enables.
    pub languages: RegistryConfig,
    /// Output format used when `--format` is not given.
    pub format: OutputFormat,
    /// Per-file read limit in bytes.
    pub max_file_size: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            languages: RegistryConfig::default(),
            format: OutputFormat::Human,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl HostConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse configuration from YAML text. An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(text).map_err(|e| anyhow!("{e}"))
    }
}
