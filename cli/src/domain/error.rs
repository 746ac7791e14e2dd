//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Process invocation errors ────────────────────────────────────────────────

/// An external invocation did not complete successfully.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessError {
    /// The program ran and exited unsuccessfully.
    #[error("`{command}` failed ({}){}", describe_exit(.code), describe_diagnostics(.diagnostics))]
    Failed {
        command: String,
        /// Exit code, `None` when the process was killed by a signal.
        code: Option<i32>,
        /// Captured stderr, or stdout when stderr was empty.
        diagnostics: String,
    },

    /// The program could not be started, or was killed on timeout.
    #[error("could not run `{command}`: {reason}")]
    Spawn { command: String, reason: String },

    /// The port helper succeeded but printed something that is not a port.
    #[error("`{command}` printed an invalid port: {output:?}")]
    InvalidPort { command: String, output: String },
}

impl ProcessError {
    /// Short machine-readable code used in `--json` error objects.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ProcessError::Failed { .. } => "PROCESS_FAILED",
            ProcessError::Spawn { .. } => "PROCESS_SPAWN",
            ProcessError::InvalidPort { .. } => "INVALID_PORT",
        }
    }
}

#[allow(clippy::ref_option)]
fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

fn describe_diagnostics(diagnostics: &str) -> String {
    let trimmed = diagnostics.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{trimmed}")
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}
