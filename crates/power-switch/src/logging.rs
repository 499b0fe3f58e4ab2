//! Tracing subscriber setup.
//!
//! Debug builds log to stderr. Release builds run without a console on
//! Windows, so they write a daily-rolling file under the user's local data
//! directory instead.

use crate::config::Config;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "power_switch=debug,power_switch_core=debug";
const LOG_FILE_PREFIX: &str = "power-switch.log";

/// Install the global subscriber.
///
/// The returned guard flushes buffered file output when dropped and must be
/// kept alive until the event loop ends.
pub(crate) fn init() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if cfg!(debug_assertions) {
        tracing_subscriber::fmt().with_env_filter(filter).init();
        return None;
    }

    match Config::project_dirs() {
        Ok(dirs) => {
            let appender =
                tracing_appender::rolling::daily(dirs.data_local_dir().join("logs"), LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();

            Some(guard)
        }
        Err(_) => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
    }
}

/// Flush and close the log file before the process exits.
///
/// `std::process::exit` skips destructors, so fatal paths must hand the
/// guard here first or the final error line is lost.
pub(crate) fn finish(guard: Option<WorkerGuard>) {
    drop(guard);
}
