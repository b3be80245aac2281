mod config;
mod error;
mod install;

pub use config::{DEFAULT_FILTER, ENV_LOG, ENV_LOG_FORMAT, LoggerConfig, LoggerFormat};
pub use error::LoggerError;

/// Install the global `tracing` subscriber described by `cfg`.
///
/// Fails with [`LoggerError::AlreadyInitialized`] when a subscriber is already installed.
pub fn logger_init(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    install::install(cfg)
}
