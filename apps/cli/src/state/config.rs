//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--lang`, `--format`)
//! 2. Environment variables (`NUMERO_*`, e.g. `NUMERO_LANGUAGE=ja`)
//! 3. Config file (`numero.toml` in the platform config dir, or `--config`)
//! 4. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use numero_core::validation::validate_birthdate;
use numero_core::{Language, DEFAULT_BIRTHDATE};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "NUMERO";

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "numero.toml";

/// How a reading is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled lines for people
    #[default]
    Text,

    /// The serialized reading
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Language of labels, interpretations and notices.
    pub language: Language,

    /// Birthdate the form starts with when none is entered.
    pub default_birthdate: NaiveDate,

    /// Output rendering.
    pub output_format: OutputFormat,

    /// Flag master numbers (11, 22, 33) in text output.
    pub mark_master_numbers: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Language: English
    /// - Default birthdate: 1980-01-01
    /// - Output: text, master numbers marked
    fn default() -> Self {
        ConfigState {
            language: Language::En,
            default_birthdate: DEFAULT_BIRTHDATE,
            output_format: OutputFormat::Text,
            mark_master_numbers: true,
        }
    }
}

impl ConfigState {
    /// Loads configuration from the config file and `NUMERO_*` variables.
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                debug!(path = %path.display(), "Using explicit config file");
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(path) = Self::default_config_path() {
                    debug!(path = %path.display(), "Looking for config file");
                    builder = builder.add_source(File::from(path).required(false));
                }
            }
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));
        Self::from_builder(builder)
    }

    /// Builds and validates configuration from prepared sources.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: ConfigState = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(?config, "Configuration resolved");
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_birthdate(self.default_birthdate)
            .map_err(|e| ConfigError::InvalidValue(format!("default_birthdate: {e}")))
    }

    /// Applies command-line overrides on top of file and environment.
    pub fn with_overrides(mut self, language: Option<Language>, format: Option<OutputFormat>) -> Self {
        if let Some(language) = language {
            self.language = language;
        }
        if let Some(format) = format {
            self.output_format = format;
        }
        self
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "numero", "numero")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
