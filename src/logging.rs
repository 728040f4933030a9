//! Logging configuration using tracing with an optional file appender.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize tracing.
///
/// Events go to `log_path` when given and to stderr otherwise. The returned
/// guard must be held for the duration of the program to ensure file logs
/// are flushed.
///
/// In debug builds, span enter/exit events are logged for detailed tracing.
pub fn init_logging(log_path: Option<&Path>, level: &str) -> WorkerGuard {
    let filter = EnvFilter::try_new(format!("color_wallpaper={level}"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (writer, guard) = match log_path {
        Some(log_path) => {
            let parent = log_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let filename = log_path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("color-wallpaper.log"));

            let file_appender = tracing_appender::rolling::never(parent, filename);
            tracing_appender::non_blocking(file_appender)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false);

    // Only add span events in debug builds
    #[cfg(debug_assertions)]
    let layer = {
        use tracing_subscriber::fmt::format::FmtSpan;
        layer.with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
    };

    tracing_subscriber::registry().with(filter).with(layer).init();

    guard
}
