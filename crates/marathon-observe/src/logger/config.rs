use std::io::IsTerminal;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::error::LoggerError;

/// Filter used when none is configured: client request logs at `info`, everything else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,marathon_client=info";

/// Environment variable holding an `EnvFilter` directive.
pub const ENV_LOG: &str = "MARATHON_LOG";

/// Environment variable selecting the output format.
pub const ENV_LOG_FORMAT: &str = "MARATHON_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerFormat {
    #[default]
    Text,
    Json,
    /// systemd journal (linux, `journald` feature).
    Journald,
}

/// Subscriber settings.
///
/// `filter` is an `EnvFilter` directive, e.g. `"info"` or `"marathon_client=debug,warn"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub filter: String,
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::Text,
            filter: DEFAULT_FILTER.to_string(),
            with_targets: true,
            use_color: std::io::stdout().is_terminal(),
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by `MARATHON_LOG` and `MARATHON_LOG_FORMAT`.
    pub fn from_env() -> Result<Self, LoggerError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`LoggerConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoggerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            cfg.filter = filter;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            cfg.format = parse_format(ENV_LOG_FORMAT, &format)?;
        }
        cfg.env_filter()?;
        Ok(cfg)
    }

    pub(crate) fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        EnvFilter::try_new(&self.filter).map_err(|_| LoggerError::InvalidFilter(self.filter.clone()))
    }
}

fn parse_format(var: &'static str, value: &str) -> Result<LoggerFormat, LoggerError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" | "plain" => Ok(LoggerFormat::Text),
        "json" => Ok(LoggerFormat::Json),
        "journald" | "journal" if cfg!(all(target_os = "linux", feature = "journald")) => {
            Ok(LoggerFormat::Journald)
        }
        "journald" | "journal" => Err(LoggerError::JournaldNotSupported),
        _ => Err(LoggerError::InvalidFormat {
            var,
            value: value.to_string(),
        }),
    }
}
