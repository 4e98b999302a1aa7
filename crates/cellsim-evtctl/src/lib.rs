//! Operator tool for the simulator's event identifier registry.
//!
//! Lists the identifier space, resolves raw ids found in logs and traces,
//! decodes ids into channel and ordinal, and runs the registry self-check.
//! The binary in `main.rs` is a thin shell over [`commands`].

pub mod cli;
pub mod commands;
pub mod config;

use cellsim_events::{ParseEventTypeError, RegistryError};
use tracing_subscriber::EnvFilter;

pub use config::{load_config, Config, ConfigError, OutputFormat};

/// Errors surfaced by the tool.
#[derive(Debug, thiserror::Error)]
pub enum EvtctlError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The registry rejected an id or failed its self-check.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A command-line id could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseEventTypeError),

    /// A name given to `lookup` matches no event.
    #[error("no event named {0:?}")]
    UnknownName(String),

    /// Output could not be rendered.
    #[error("failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl EvtctlError {
    /// Process exit status for this error.
    ///
    /// Internal defects (bad config, inconsistent table) exit with 1; bad
    /// operator input exits with 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Registry(RegistryError::Inconsistent(_)) => 1,
            Self::Registry(_) | Self::Parse(_) | Self::UnknownName(_) | Self::Json(_) => 2,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_tracing(config: &config::LoggingConfig) {
    let (filter, rejected) = match EnvFilter::try_new(&config.level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    };

    if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    if let Some(err) = rejected {
        tracing::warn!(
            level = %config.level,
            error = %err,
            "invalid log level filter, falling back to info"
        );
    }
}
