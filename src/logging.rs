//! File-backed tracing. Stdout belongs to the UI, so nothing is ever logged to the terminal.

use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "cellmenu.log";
const DEFAULT_FILTER: &str = "cellmenu=info";

/// Keeps the non-blocking writer alive; logs are flushed when this is dropped.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// `<base>/cellmenu/logs`, created if missing.
pub fn ensure_log_dir_in(base: &Path) -> io::Result<PathBuf> {
    let dir = base.join("cellmenu").join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    ensure_log_dir_in(&std::env::temp_dir())
}

/// Installs the global subscriber. Returns `None` if logging could not be set up; the UI
/// runs without logs in that case.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = ensure_log_dir().ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
