use crate::config::ConfigError;
use chrono::Timelike;
use std::str::FromStr;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct SystemTime;

impl FormatTime for SystemTime {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let time = chrono::prelude::Local::now();
        write!(
            w,
            "{:02}:{:02}:{:02}.{:03}",
            time.hour() % 24,
            time.minute(),
            time.second(),
            time.timestamp_subsec_millis()
        )
    }
}

/// Logs go to stderr so generated configuration text on stdout stays clean.
pub fn init_tracing() -> Result<(), ConfigError> {
    let stderr_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_timer(SystemTime);
    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(
            EnvFilter::builder()
                .with_default_directive(
                    Directive::from_str("surgegen=info")
                        .map_err(|_| ConfigError::Internal("Tracing filter"))?,
                )
                .from_env_lossy(),
        )
        .init();
    Ok(())
}
