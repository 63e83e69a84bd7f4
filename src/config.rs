//! Configuration loaded from `~/.config/pagemark/config.toml`.
//!
//! ```toml
//! [layout]
//! parallel = true
//!
//! [output]
//! normalize = true
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Page orchestration settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Render extracted pages on the rayon pool. Output order is unaffected.
    pub parallel: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Post-processing settings applied by the content router.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Run whitespace and control-character normalization on converted output.
    pub normalize: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { normalize: true }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load from the default location.
    ///
    /// Returns defaults if the file doesn't exist (configuration is optional).
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path, defaulting when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
    }
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pagemark")
        .join("config.toml")
}
