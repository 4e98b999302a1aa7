//! Tool configuration loading from file and environment variables.

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Registry start-up behaviour.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Command output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "cellsim_events=debug,warn").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

/// Registry start-up configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Verify the name table before running any command.
    #[serde(default = "default_self_check")]
    pub self_check_on_start: bool,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Format used when a command does not override it.
    #[serde(default)]
    pub format: OutputFormat,
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text columns.
    #[default]
    Text,
    /// JSON documents.
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_self_check() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            self_check_on_start: default_self_check(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `CELLSIM_LOG_LEVEL` overrides `logging.level`
/// - `CELLSIM_LOG_JSON` overrides `logging.json` (set to "true" to enable)
/// - `CELLSIM_SELF_CHECK` overrides `registry.self_check_on_start`
/// - `CELLSIM_OUTPUT_FORMAT` overrides `output.format` ("text" or "json")
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(level) = std::env::var("CELLSIM_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("CELLSIM_LOG_JSON") {
        config.logging.json = parse_flag(&json);
    }
    if let Ok(check) = std::env::var("CELLSIM_SELF_CHECK") {
        config.registry.self_check_on_start = parse_flag(&check);
    }
    if let Ok(format) = std::env::var("CELLSIM_OUTPUT_FORMAT") {
        if let Ok(parsed) = OutputFormat::from_str(format.trim(), true) {
            config.output.format = parsed;
        }
    }

    Ok(config)
}

fn parse_flag(value: &str) -> bool {
    value == "true" || value == "1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.registry.self_check_on_start);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn sections_override_defaults() {
        let config: Config = toml::from_str(
            r#"
            [logging]
            level = "debug"
            json = true

            [registry]
            self_check_on_start = false

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert!(!config.registry.self_check_on_start);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_format_is_a_parse_error() {
        let result: Result<Config, _> = toml::from_str("[output]\nformat = \"yaml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn format_names_match_clap_values_ignoring_case() {
        assert_eq!(OutputFormat::from_str("JSON", true), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("text", true), Ok(OutputFormat::Text));
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }

    #[test]
    fn flags_accept_true_and_one() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("yes"));
    }
}
