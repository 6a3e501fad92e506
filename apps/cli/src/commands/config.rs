//! # Config Commands
//!
//! Prints the effective configuration.

use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, OutputFormat};

/// Renders the configuration after all sources and flags are applied.
///
/// ## When Used
/// - Checking what `numero.toml` and `NUMERO_*` resolved to
/// - Producing a starter config file: `numero config > numero.toml`
pub fn show_config(config: &ConfigState) -> Result<String, ApiError> {
    debug!("show_config command");
    match config.output_format {
        OutputFormat::Text => Ok(toml::to_string_pretty(config)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_output_round_trips_through_loader() {
        let rendered = show_config(&ConfigState::default()).unwrap();
        assert!(rendered.contains("language = \"en\""));
        assert!(rendered.contains("default_birthdate = \"1980-01-01\""));

        let builder = config::Config::builder()
            .add_source(config::File::from_str(&rendered, config::FileFormat::Toml));
        assert_eq!(
            ConfigState::from_builder(builder).unwrap(),
            ConfigState::default()
        );
    }

    #[test]
    fn test_json_output() {
        let config = ConfigState {
            output_format: OutputFormat::Json,
            ..ConfigState::default()
        };
        let value: serde_json::Value =
            serde_json::from_str(&show_config(&config).unwrap()).unwrap();
        assert_eq!(value["output_format"], "json");
    }
}
