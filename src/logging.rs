//! Logging bootstrap
//!
//! Logs go to stderr: stdout carries the MCP protocol stream.
//!
//! # Invariants
//! - Initialization is idempotent for the same level.
//! - Initialization never panics.
//! - Re-initialization with a different level is rejected.

use anyhow::{Result, anyhow, bail};
use flexi_logger::{Logger, LoggerHandle, WriteMode};
use std::sync::OnceLock;

const SUPPORTED_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

static LOGGING_STATE: OnceLock<LoggingState> = OnceLock::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Normalize and check a level name
///
/// # Errors
/// Returns an error when `level` is not one of error/warn/info/debug/trace.
pub fn normalize_level(level: &str) -> Result<&'static str> {
    let lower = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .find(|l| **l == lower)
        .copied()
        .ok_or_else(|| {
            anyhow!(
                "unsupported log level `{}`; expected one of {}",
                level,
                SUPPORTED_LEVELS.join(", ")
            )
        })
}

/// Start the stderr logger at `level`
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when logging was already started with another level.
/// - Returns an error when the logger backend fails to start.
pub fn init_logging(level: &str) -> Result<()> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.level != level {
            bail!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                state.level,
                level
            );
        }
        return Ok(());
    }

    let logger = Logger::try_with_str(level)
        .map_err(|err| anyhow!("invalid log level `{level}`: {err}"))?
        .log_to_stderr()
        .write_mode(WriteMode::Direct)
        .format(flexi_logger::detailed_format)
        .start()
        .map_err(|err| anyhow!("failed to start logger: {err}"))?;

    let _ = LOGGING_STATE.set(LoggingState {
        level,
        _logger: logger,
    });

    log::info!(
        "event=app_start module=server status=ok level={} version={}",
        level,
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}
