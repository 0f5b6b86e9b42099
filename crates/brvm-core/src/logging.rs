//! Logging initialization using the `tracing` ecosystem.
//!
//! Provides:
//! - Console output (human-readable, on stderr so stdout stays clean for
//!   the runner's JSON)
//! - File output (daily rotation via `tracing-appender`)
//! - Configurable log level via env var `RUST_LOG` or the config file

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Initialize the global tracing subscriber.
///
/// Should be called once at program start. `RUST_LOG` wins over
/// `log.level`; `log.dir` enables a daily-rotating file named after
/// `log.module_name`.
pub fn init_logging(log: &LogConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(true);

    if let Some(dir) = &log.dir {
        let file_appender = tracing_appender::rolling::daily(dir, &log.module_name);
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
    }
}
