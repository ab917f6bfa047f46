//! Logging setup
//!
//! Console logging by default; an optional daily-rolling file appender can
//! be enabled by passing a log directory.

use tracing_subscriber::EnvFilter;

/// Initialize console logging at the default level
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize logging with an explicit level and optional file output
///
/// The level falls back to `RUST_LOG`, then to `info`. When `log_dir`
/// points at an existing directory, output goes to a daily-rolling
/// `order-server.*` file there instead of the console.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && std::path::Path::new(dir).is_dir()
    {
        let appender = tracing_appender::rolling::daily(dir, "order-server");
        subscriber.with_writer(appender).init();
        return;
    }

    subscriber.init();
}
