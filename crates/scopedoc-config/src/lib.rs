//! Configuration management for Scopedoc.
//!
//! Parses `scopedoc.toml` with serde and provides auto-discovery of the
//! config file in parent directories. Every section is optional; missing
//! or malformed configuration falls back to built-in defaults, so a
//! program document can always be assembled.
//!
//! ```toml
//! [document]
//! suggested_only = true
//!
//! [[template]]
//! type = "paragraph"
//! text = "--START IN-SCOPE----END IN-SCOPE--"
//!
//! [rewards]
//! default_tier = "standard"
//!
//! [rewards.tiers.standard]
//! title = "Standard"
//! description = "The most common choice."
//!
//! [rewards.tiers.standard.levels]
//! critical = "$1,500 - $4,000"
//! ```

mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use scopedoc_model::{TemplateBlock, TierCatalog};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "scopedoc.toml";

/// Error loading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has the wrong shape.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
}

/// Document-assembly settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Whether only confident asset suggestions are merged, excluding the
    /// provider's alternatives.
    pub suggested_only: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            suggested_only: true,
        }
    }
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document-assembly settings.
    pub document: DocumentConfig,
    /// Template blocks, in document order.
    pub template: Vec<TemplateBlock>,
    /// Reward-tier catalog.
    pub rewards: TierCatalog,

    /// Path the config was loaded from (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: DocumentConfig::default(),
            template: defaults::default_template(),
            rewards: defaults::default_catalog(),
            config_path: None,
        }
    }
}

impl Config {
    /// Parse configuration from a TOML string.
    ///
    /// An empty template list or an empty tier catalog falls back to the
    /// built-in defaults for that section.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(text)?;
        if config.template.is_empty() {
            tracing::debug!("no template blocks configured; using built-in template");
            config.template = defaults::default_template();
        }
        if config.rewards.tiers.is_empty() {
            tracing::debug!("no reward tiers configured; using built-in catalog");
            config.rewards = defaults::default_catalog();
        }
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&text)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Find `scopedoc.toml` in `start` or any parent directory.
    #[must_use]
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the discovered config, or the defaults when there is none or
    /// it cannot be parsed. Never fails.
    #[must_use]
    pub fn load_or_default(start: &Path) -> Self {
        let Some(path) = Self::discover(start) else {
            tracing::debug!("no {CONFIG_FILENAME} found; using defaults");
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(path = %path.display(), "invalid config, using defaults: {e}");
                Self::default()
            }
        }
    }
}
