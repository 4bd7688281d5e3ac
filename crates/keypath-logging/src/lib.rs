// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized logging utilities for keypath consumers
//!
//! The resolver library only emits `tracing` events. Programs embedding it call one
//! of the `init*` functions here once at startup to install a subscriber, usually
//! driven by a [`logging_config::LoggingConfig`] read from their own configuration.

pub mod logging_config;

use serde::{Deserialize, Serialize};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export Level for convenience
pub use tracing::Level;

/// Output format for log messages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable plaintext format
    #[default]
    Plaintext,
    /// Structured JSON format
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Plaintext => write!(f, "plaintext"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plaintext" => Ok(LogFormat::Plaintext),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid log format: {}. Use 'plaintext' or 'json'",
                s
            )),
        }
    }
}

/// Initialize console logging with the specified component name, default level, and format
///
/// # Arguments
/// * `component` - The component name used in the default filter
/// * `default_level` - Default log level when RUST_LOG is not set
/// * `format` - Output format for log messages
///
/// # Example
/// ```rust
/// use keypath_logging::{init, Level, LogFormat};
///
/// fn main() -> anyhow::Result<()> {
///     init("my-service", Level::INFO, LogFormat::Plaintext)?;
///     tracing::info!("Application started");
///     Ok(())
/// }
/// ```
pub fn init(component: &str, default_level: Level, format: LogFormat) -> anyhow::Result<()> {
    init_with_writer(component, default_level, format, io::stdout)
}

/// Initialize logging to a file, creating parent directories and appending to
/// an existing file
pub fn init_to_file(
    component: &str,
    default_level: Level,
    format: LogFormat,
    log_path: &std::path::Path,
) -> anyhow::Result<()> {
    use std::fs;

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let log_file = fs::OpenOptions::new().create(true).append(true).open(log_path)?;

    init_with_writer(component, default_level, format, log_file)
}

/// Initialize logging with a custom writer
///
/// # Arguments
/// * `component` - The component name used in the default filter
/// * `default_level` - Default log level when RUST_LOG is not set
/// * `format` - Output format for log messages
/// * `writer` - Where to write log output
pub fn init_with_writer<W>(
    component: &str,
    default_level: Level,
    format: LogFormat,
    writer: W,
) -> anyhow::Result<()>
where
    W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(component, default_level)));

    match format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).json();
            #[cfg(debug_assertions)]
            let layer = layer.with_file(true).with_line_number(true);

            tracing_subscriber::registry().with(filter).with(layer).try_init()?;
        }
        LogFormat::Plaintext => {
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false);
            #[cfg(debug_assertions)]
            let layer = layer.with_file(true).with_line_number(true);

            tracing_subscriber::registry().with(filter).with(layer).try_init()?;
        }
    }

    Ok(())
}

/// Filter directive used when RUST_LOG is not set
///
/// Crate targets use underscores, so `my-service` also matches `my_service` events.
fn default_filter(component: &str, default_level: Level) -> String {
    let target = component.replace('-', "_");
    format!("{},{}={}", default_level, target, default_level)
}

/// Initialize logging for testing with a buffer
///
/// Returns the shared buffer the subscriber writes plaintext output into.
#[cfg(feature = "test-utils")]
pub fn init_for_test(
    component: &str,
    default_level: Level,
) -> anyhow::Result<std::sync::Arc<std::sync::Mutex<Vec<u8>>>> {
    use std::io::Write;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing_subscriber::fmt::MakeWriter;

    struct BufferWriter(Arc<Mutex<Vec<u8>>>);
    struct BufferGuard<'a>(MutexGuard<'a, Vec<u8>>);

    impl<'a> Write for BufferGuard<'a> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = BufferGuard<'a>;
        fn make_writer(&'a self) -> Self::Writer {
            // A poisoned buffer only means another test panicked mid-write
            BufferGuard(self.0.lock().unwrap_or_else(|e| e.into_inner()))
        }
    }

    let shared = Arc::new(Mutex::new(Vec::new()));
    let writer = BufferWriter(shared.clone());
    init_with_writer(component, default_level, LogFormat::Plaintext, writer)?;
    Ok(shared)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_round_trip_names() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("PlainText".parse::<LogFormat>().unwrap(), LogFormat::Plaintext);
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert!("xml".parse::<LogFormat>().unwrap_err().contains("xml"));
    }

    #[test]
    fn test_log_format_default() {
        assert_eq!(LogFormat::default(), LogFormat::Plaintext);
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(
            default_filter("keypath-core", Level::DEBUG),
            "DEBUG,keypath_core=DEBUG"
        );
    }

    #[test]
    fn test_log_format_deserializes_lowercase() {
        let f: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(f, LogFormat::Json);
    }
}
