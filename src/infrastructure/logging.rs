use std::{
    io::{self, IsTerminal},
    path::Path,
};

use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

const LOG_FILE_PREFIX: &str = "safety-checker.log";

static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// `RUST_LOG` wins over `LOG_LEVEL`; an unparsable level falls back to `info`.
fn level_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber: human-readable stderr output plus a
/// daily-rotated plain file under `logs_dir`. Calling it twice is a no-op.
pub fn init_tracing(logging: &LoggingConfig, logs_dir: &Path) -> Result<()> {
    if FILE_GUARD.get().is_some() {
        return Ok(());
    }

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX));

    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true);
    let file = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(level_filter(&logging.level))
        .with(console)
        .with(file)
        .try_init()?;

    let _ = FILE_GUARD.set(guard);
    tracing::info!(
        logs = %logs_dir.display(),
        level = %logging.level,
        "tracing initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_level_falls_back_to_info() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(level_filter("checker=loud").to_string(), "info");
        assert_eq!(level_filter("debug").to_string(), "debug");
    }
}
