//! `log` adapter for Kiln Functions
//!
//! This crate adapts [`log`](https://docs.rs/log) to Kiln Functions. `log` is a standard logging crate,
//! used widely across the ecosystem.
//!
//! A function owns its standard error stream; the host captures everything
//! written there and forwards it to the function's log stream.
//!
//! You are likely to be interested in the sibling crates:
//! * [`kiln-functions-guest-web`](https://crates.io/crates/kiln-functions-guest-web): Guest bindings for web functions.
//! * [`kiln-functions-bytes`](https://crates.io/crates/kiln-functions-bytes): Payload types and encodings.

use log::SetLoggerError;
use thiserror::Error;

mod stderr_logger;

/// Which logging mode to use?
pub enum LogMode {
    /// Write one line per record to standard error.
    ///
    /// The host collects the stream per invocation. You can follow it with
    /// the `kiln` CLI: `kiln function logs $function`.
    Stderr,
}

#[derive(Debug, Error)]
pub enum LogConfigError {
    #[error("Failed to initialize stderr logger: {cause}")]
    StderrInit { cause: SetLoggerError },
}

/// Initializes the logging system with the specified log level and mode.
///
/// You **must** only call this function once.
pub fn configure_logging(level: log::LevelFilter, mode: LogMode) -> Result<(), LogConfigError> {
    match mode {
        LogMode::Stderr => stderr_logger::StderrLog::init(level)
            .map_err(|e| LogConfigError::StderrInit { cause: e }),
    }
}
