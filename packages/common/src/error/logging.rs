//! Structured logging setup and redacting log helpers
//!
//! Built on `env_logger` and the `log` facade. Seeds and derived passwords
//! never reach a log record, only counts, lengths and file paths do.

use log::{debug, info, warn};
use std::path::Path;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Target of the records written through [`LoggingTransformer`]
///
/// `env_logger` filters match target prefixes, so `RUST_LOG=seedpass=debug`
/// also enables the `seedpass_password` and `seedpass_hashing` builder events.
pub const LOG_TARGET: &str = "seedpass";

/// Logging entry points shared by the seedpass packages
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging (call once at application startup)
    ///
    /// Levels come from `RUST_LOG`: `RUST_LOG=seedpass=info` shows derivation
    /// summaries, `RUST_LOG=seedpass_password=debug` only the builder events.
    /// Defaults to `warn` so normal runs keep stderr quiet.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
                .format_timestamp_micros()
                .init();

            debug!(target: LOG_TARGET, "Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Record a derivation request without any secret material
    pub fn log_derivation(seed_count: usize, length: usize, success: bool) {
        if success {
            info!(target: LOG_TARGET, "Password derived (seed_count: {seed_count}, length: {length})");
        } else {
            warn!(target: LOG_TARGET, "Password derivation rejected (seed_count: {seed_count}, length: {length})");
        }
    }

    /// Record where the configuration was loaded from
    pub fn log_config_source(path: Option<&Path>) {
        match path {
            Some(path) => info!(target: LOG_TARGET, "Configuration loaded from {}", path.display()),
            None => debug!(target: LOG_TARGET, "No configuration file found, using defaults"),
        }
    }

    /// Record rejected user input by category only
    pub fn log_rejected_input(reason: &str) {
        warn!(target: LOG_TARGET, "Input rejected: {reason}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        LoggingTransformer::log_derivation(3, 12, true);
        LoggingTransformer::log_derivation(0, 12, false);
        LoggingTransformer::log_config_source(None);
        LoggingTransformer::log_config_source(Some(Path::new("/tmp/seedpass.json")));
        LoggingTransformer::log_rejected_input("blank seed");
    }
}
