//! Stop and liveness operations keyed by the derived container names.

use botfleet_common::Instance;
use serde::Serialize;

use super::{InstanceProcess, fall_back};
use crate::application::ports::CommandRunner;
use crate::domain::error::ProcessError;
use crate::domain::invocation;
use crate::domain::naming::ContainerNames;
use crate::domain::policy::Operation;

/// Liveness of both halves of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstanceStatus {
    pub core: bool,
    pub ui: bool,
}

impl<R: CommandRunner> InstanceProcess<R> {
    /// Stop core and UI. Both are always attempted and nothing is reported.
    pub async fn stop(&self, instance: &Instance) {
        tokio::join!(self.stop_core(instance), self.stop_ui(instance));
    }

    /// Kill and remove the core container, ignoring failures.
    pub async fn stop_core(&self, instance: &Instance) {
        let names = ContainerNames::for_instance(instance);
        self.stop_container(Operation::StopCore, &names.core).await;
    }

    /// Kill and remove the UI container, ignoring failures.
    pub async fn stop_ui(&self, instance: &Instance) {
        let names = ContainerNames::for_instance(instance);
        self.stop_container(Operation::StopUi, &names.ui).await;
    }

    /// # Errors
    ///
    /// Returns `ProcessError` if the runtime query itself fails.
    pub async fn is_core_running(&self, instance: &Instance) -> Result<bool, ProcessError> {
        let names = ContainerNames::for_instance(instance);
        self.is_running(Operation::QueryCore, &names.core).await
    }

    /// # Errors
    ///
    /// Returns `ProcessError` if the runtime query itself fails.
    pub async fn is_ui_running(&self, instance: &Instance) -> Result<bool, ProcessError> {
        let names = ContainerNames::for_instance(instance);
        self.is_running(Operation::QueryUi, &names.ui).await
    }

    /// Query both containers concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first `ProcessError` (core before UI) if either query fails.
    pub async fn status(&self, instance: &Instance) -> Result<InstanceStatus, ProcessError> {
        let (core, ui) = tokio::join!(self.is_core_running(instance), self.is_ui_running(instance));
        Ok(InstanceStatus {
            core: core?,
            ui: ui?,
        })
    }

    async fn stop_container(&self, op: Operation, container: &str) {
        // rm runs even when kill fails: the container may already be stopped.
        let killed = self
            .invoke(op, &invocation::kill(&self.config, container))
            .await
            .map(drop);
        fall_back(op, killed, || ());

        let removed = self
            .invoke(op, &invocation::remove(&self.config, container))
            .await
            .map(drop);
        fall_back(op, removed, || ());

        tracing::info!(container, "container stopped");
    }

    async fn is_running(&self, op: Operation, container: &str) -> Result<bool, ProcessError> {
        let stdout = self
            .invoke(op, &invocation::find_running(&self.config, container))
            .await?;
        Ok(!stdout.trim().is_empty())
    }
}
