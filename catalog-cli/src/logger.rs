//! Logging setup
//!
//! Logs go to stderr so command output on stdout stays pipeable. With a log
//! directory, a daily rolling file receives the same events without colors.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn,catalog_client=info,catalog_cli=info";
/// Filter used with `--verbose`
pub const VERBOSE_FILTER: &str = "info,catalog_client=debug,catalog_cli=debug,shared=debug";

const LOG_FILE_PREFIX: &str = "catalog.log";

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    if let Ok(from_env) = EnvFilter::try_from_default_env() {
        from_env
    } else if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::new(DEFAULT_FILTER)
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the whole run.
pub fn init_logger(verbose: bool, log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_target(verbose)
        .with_level(true)
        .with_writer(std::io::stderr);

    let Some(dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter(verbose))
            .with(stderr_layer)
            .try_init()?;
        return Ok(None);
    };

    std::fs::create_dir_all(dir)?;
    let appender = rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    tracing::debug!(path = %dir.display(), "File logging enabled");
    Ok(Some(guard))
}
