use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Keeps the non-blocking file writer alive; drop it only at process exit.
#[allow(dead_code)]
pub struct LoggerGuard(Option<WorkerGuard>);

/// Install the global subscriber.
///
/// Console output goes to stderr because stdout carries the lookup result.
/// `RUST_LOG` overrides `level` the same way for both layers.
pub fn init_logging(level: &str, log_dir: Option<&Path>) -> LoggerGuard {
    let level = parse_level(level);

    let builder = EnvFilter::builder().with_default_directive(level.into());
    let rust_log = std::env::var("RUST_LOG").unwrap_or_default();
    let console_filter = builder.clone().parse_lossy(&rust_log);

    let mut guard = None;
    let file_layer = match log_dir.map(build_file_appender) {
        Some(Ok(appender)) => {
            let (non_blocking, worker_guard) = NonBlocking::new(appender);
            guard = Some(worker_guard);
            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(builder.parse_lossy(&rust_log)),
            )
        }
        Some(Err(e)) => {
            eprintln!("Failed to create log file appender: {}", e);
            None
        }
        None => None,
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    LoggerGuard(guard)
}

fn parse_level(level: &str) -> LevelFilter {
    match level {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'warn'", level);
            LevelFilter::WARN
        }
    }
}

fn build_file_appender(
    log_dir: &Path,
) -> Result<RollingFileAppender, tracing_appender::rolling::InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("callsign-search")
        .filename_suffix("log")
        .build(log_dir)
}
