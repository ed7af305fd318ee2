//! File-based logging setup.
//!
//! The terminal belongs to the TUI, so logs go to `${FOLIO_HOME}/logs/` with
//! daily rotation. The filter comes from `FOLIO_LOG` (default `folio=info`).

use folio_core::config;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Returns the appender guard; the caller
/// must keep it alive for the process lifetime.
///
/// Logging failing to initialize is not worth refusing to start over: any
/// problem is reported on stderr and the process runs unlogged.
pub fn init() -> Option<WorkerGuard> {
    let logs_dir = config::paths::logs_dir();
    if let Err(err) = std::fs::create_dir_all(&logs_dir) {
        eprintln!("warning: cannot create log directory: {err}");
        return None;
    }

    let appender = tracing_appender::rolling::daily(logs_dir, "folio.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("FOLIO_LOG")
        .unwrap_or_else(|_| EnvFilter::new("folio=info,folio_core=info,folio_tui=info"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    if let Err(err) = result {
        eprintln!("warning: logging not initialized: {err}");
        return None;
    }

    Some(guard)
}
