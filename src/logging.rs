//! Diagnostic logging bootstrap.
//!
//! Diagnostics go through the `log` facade to stderr via `flexi_logger`, as
//! `event=<name> module=<module> status=<status> key=value` lines. User-facing
//! results stay on stdout through [`crate::output`], so piping the output of
//! `check --json` never mixes in log lines.
//!
//! `RUST_LOG`, when set, overrides the level given on the command line.

use flexi_logger::{Logger, LoggerHandle};

/// Level used when neither the CLI nor `RUST_LOG` sets one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Start logging at `level`. Keep the returned handle alive for the whole run.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when the logger backend fails to start.
pub fn init_logging(level: &str) -> Result<LoggerHandle, String> {
    let level = normalize_level(level)?;
    Logger::try_with_env_or_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))
}

pub(crate) fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        )),
    }
}
