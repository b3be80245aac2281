use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("{var}: unknown log format `{value}` (expected text, json or journald)")]
    InvalidFormat { var: &'static str, value: String },
    #[error("journald output requires linux and the `journald` feature")]
    JournaldNotSupported,
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
    #[error("failed to install tracing subscriber: {0}")]
    InitializationFailed(String),
    #[error("invalid log filter `{0}`")]
    InvalidFilter(String),
}
