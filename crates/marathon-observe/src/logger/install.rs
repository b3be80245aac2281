use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, fmt::time::OffsetTime, layer::Layered, layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::logger::config::{LoggerConfig, LoggerFormat};
use crate::logger::error::LoggerError;

type Filtered = Layered<EnvFilter, Registry>;
type OutputLayer = Box<dyn Layer<Filtered> + Send + Sync + 'static>;

pub(crate) fn install(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = cfg.env_filter()?;
    let output = output_layer(cfg)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init()
        .map_err(|e| {
            let s = e.to_string();
            if s.contains("global default") {
                LoggerError::AlreadyInitialized
            } else {
                LoggerError::InitializationFailed(s)
            }
        })
}

fn output_layer(cfg: &LoggerConfig) -> Result<OutputLayer, LoggerError> {
    match cfg.format {
        LoggerFormat::Text => Ok(fmt::layer()
            .with_ansi(cfg.use_color)
            .with_target(cfg.with_targets)
            .with_timer(local_rfc3339())
            .boxed()),
        LoggerFormat::Json => Ok(fmt::layer()
            .json()
            .with_ansi(false)
            .with_target(cfg.with_targets)
            .with_timer(local_rfc3339())
            .boxed()),
        LoggerFormat::Journald => journald_layer(),
    }
}

// Local offset lookup can fail once threads are running; UTC then.
fn local_rfc3339() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

#[cfg(all(target_os = "linux", feature = "journald"))]
fn journald_layer() -> Result<OutputLayer, LoggerError> {
    tracing_journald::layer()
        .map(|layer| layer.boxed())
        .map_err(|e| LoggerError::InitializationFailed(format!("journald: {e}")))
}

#[cfg(not(all(target_os = "linux", feature = "journald")))]
fn journald_layer() -> Result<OutputLayer, LoggerError> {
    Err(LoggerError::JournaldNotSupported)
}
