//! Logging setup for RustCasts
//!
//! Thin wrapper around `env_logger` with a timestamped format. `RUST_LOG`
//! still overrides the configured level so individual modules can be turned
//! up without touching the config file.

use std::io::Write;
use std::sync::Once;

use crate::config::LogLevel;

/// Timestamp format for log entries
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Global initialization guard
static INIT_LOGGER: Once = Once::new();

/// Initialize the global logger at the given level.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_logger(level: LogLevel) {
    INIT_LOGGER.call_once(|| {
        env_logger::Builder::new()
            .filter_level(level.to_filter())
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{} {:5} {}] {}",
                    chrono::Local::now().format(TIMESTAMP_FORMAT),
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .parse_default_env()
            .init();
    });
}
