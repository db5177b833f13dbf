use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Initialise logging. The level is `debug` when `debug` is set and `info`
/// otherwise; `RUST_LOG` only overrides it when debug logging is enabled.
///
/// With `log_file` set, output goes to that file instead of stdout. Calling
/// this more than once keeps the first subscriber.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match log_file.as_deref().and_then(file_appender) {
        Some(appender) => builder.with_ansi(false).with_writer(appender).try_init(),
        None => builder.try_init(),
    };

    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
}

fn file_appender(path: &Path) -> Option<tracing_appender::rolling::RollingFileAppender> {
    let file_name = path.file_name()?;
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("failed to create log directory {}: {err}", dir.display());
        return None;
    }
    Some(tracing_appender::rolling::never(dir, file_name))
}
