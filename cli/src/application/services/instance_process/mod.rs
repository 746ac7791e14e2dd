//! Instance process orchestration: launch, stop, inspect, and derive.
//!
//! `InstanceProcess` holds nothing but the deployment config and a
//! `CommandRunner`. Every operation takes the `Instance` explicitly,
//! re-derives container names, builds argument vectors through
//! `domain::invocation`, and maps the outcome according to the operation's
//! `FailurePolicy`.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

mod derived;
mod launch;
mod lifecycle;


use std::process::Output;

use crate::application::ports::CommandRunner;
use crate::domain::config::OrchestratorConfig;
use crate::domain::error::ProcessError;
use crate::domain::invocation::Invocation;
use crate::domain::policy::{FailurePolicy, Operation};

pub use launch::LaunchedInstance;
pub use lifecycle::InstanceStatus;

/// Stateless orchestrator for the core/UI container pair of an instance.
///
/// Safe to share across tasks for different slugs. Calls for the same slug
/// are not serialized here; that is the caller's job.
pub struct InstanceProcess<R: CommandRunner> {
    runner: R,
    config: OrchestratorConfig,
}

impl<R: CommandRunner> InstanceProcess<R> {
    pub fn new(runner: R, config: OrchestratorConfig) -> Self {
        Self { runner, config }
    }

    #[must_use]
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Execute `invocation` and return its stdout on a zero exit status.
    async fn invoke(&self, op: Operation, invocation: &Invocation) -> Result<String, ProcessError> {
        tracing::debug!(operation = %op, command = %invocation, "running invocation");

        let output = self
            .runner
            .run(&invocation.program, &invocation.arg_refs())
            .await
            .map_err(|e| ProcessError::Spawn {
                command: invocation.to_string(),
                reason: format!("{e:#}"),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(ProcessError::Failed {
                command: invocation.to_string(),
                code: output.status.code(),
                diagnostics: diagnostics(&output),
            })
        }
    }
}

/// Resolve a failed non-strict operation to its default value.
///
/// Only lenient and best-effort operations come through here; strict ones
/// propagate their `ProcessError` instead.
fn fall_back<T>(op: Operation, result: Result<T, ProcessError>, default: impl FnOnce() -> T) -> T {
    debug_assert_ne!(op.policy(), FailurePolicy::Strict, "{op} must propagate");
    match result {
        Ok(value) => value,
        Err(err) => {
            match op.policy() {
                FailurePolicy::Lenient => {
                    tracing::warn!(operation = %op, error = %err, "falling back to default");
                }
                FailurePolicy::BestEffort | FailurePolicy::Strict => {
                    tracing::debug!(operation = %op, error = %err, "ignoring failure");
                }
            }
            default()
        }
    }
}

/// Stderr when the process wrote any, otherwise stdout.
fn diagnostics(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout).into_owned()
    } else {
        stderr.into_owned()
    }
}
