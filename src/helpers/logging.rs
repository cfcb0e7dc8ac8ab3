//! Logging Setup
//!
//! Structured logs go to stdout and to a daily rolling file in the data
//! directory. `RUST_LOG` overrides the default `info` level.

use crate::helpers::{get_or_create_data_dir, is_development};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::time::LocalTime, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FILE_PREFIX: &str = "record-desk.log";

fn env_filter() -> EnvFilter {
    let default_level = if is_development() { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process. Without a usable data directory only stdout
/// logging is installed.
pub fn init_tracing() -> Option<WorkerGuard> {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_timer(LocalTime::rfc_3339())
        .with_target(false)
        .with_filter(env_filter());

    let file = get_or_create_data_dir().map(|dir| {
        let appender = tracing_appender::rolling::daily(dir.join("logs"), LOG_FILE_PREFIX);
        tracing_appender::non_blocking(appender)
    });

    match file {
        Ok((writer, guard)) => {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_timer(LocalTime::rfc_3339())
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(env_filter());
            tracing_subscriber::registry()
                .with(stdout_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry().with(stdout_layer).init();
            tracing::warn!(error = %e, "File logging disabled");
            None
        }
    }
}
