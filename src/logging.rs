// src/logging.rs

use std::error::Error;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when RUST_LOG is unset: our own events at info, windowing stack quiet.
pub const DEFAULT_LOG_FILTER: &str = "info,eframe=warn,egui_winit=warn,egui_glow=warn,winit=warn";

/// Installs the global tracing subscriber. Diagnostics go to stderr so stdout
/// only carries the user-facing progress lines.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn test_second_init_is_an_error() {
        let _ = init_logging();
        assert!(init_logging().is_err());
    }
}
