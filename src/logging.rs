//! Logging bootstrap for the binary
//!
//! The library logs through the `log` facade only; this starts a stderr
//! backend for it. Initialization is idempotent - the first caller wins.

use std::sync::OnceLock;

use flexi_logger::{Logger, LoggerHandle};

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Start stderr logging at `spec` (a `RUST_LOG`-style level specification,
/// overridable through the `RUST_LOG` environment variable).
///
/// # Errors
/// Returns a human-readable message when the spec is invalid or the backend
/// fails to start. A repeated call is a no-op.
pub fn init_logging(spec: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let handle = Logger::try_with_env_or_str(spec)
        .map_err(|e| format!("invalid log specification `{spec}`: {e}"))?
        .log_to_stderr()
        .start()
        .map_err(|e| format!("failed to start logging: {e}"))?;

    let _ = LOGGER.set(handle);
    Ok(())
}
