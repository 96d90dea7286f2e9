//! Diagnostic logging bootstrap.
//!
//! Logs go to stderr through `flexi_logger` so they never interleave with the
//! menu on stdout. Events are metadata-only lines of the form
//! `event=<name> module=<module> key=value`.

use crate::error::Result;
use flexi_logger::{Logger, LoggerHandle};
use log::info;

/// Starts the logger with a flexi_logger spec such as `warn` or `libris=debug`.
///
/// The returned handle must be kept alive for the lifetime of the process.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_str(level)?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()?;

    info!(
        "event=app_start module=core status=ok platform={} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}
