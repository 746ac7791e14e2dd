//! Launching the core engine and its optional UI companion.

use botfleet_common::Instance;
use serde::Serialize;

use super::{InstanceProcess, fall_back};
use crate::application::ports::CommandRunner;
use crate::domain::error::ProcessError;
use crate::domain::invocation;
use crate::domain::policy::Operation;

/// Container ids returned by the runtime for a launched instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchedInstance {
    pub core: String,
    /// `None` when the UI was not requested or failed to start.
    pub ui: Option<String>,
}

impl<R: CommandRunner> InstanceProcess<R> {
    /// Start the core container and, when `with_ui` is set, the UI.
    ///
    /// The UI is only attempted after the core has started.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError` if the core fails to start. A UI failure is
    /// reported as `ui: None` instead.
    pub async fn launch(
        &self,
        instance: &Instance,
        with_ui: bool,
    ) -> Result<LaunchedInstance, ProcessError> {
        let core = self.launch_core(instance).await?;
        let ui = if with_ui {
            self.launch_ui(instance).await
        } else {
            None
        };
        Ok(LaunchedInstance { core, ui })
    }

    /// Start the trading engine container and return its id.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError` carrying the runtime's diagnostics if the
    /// container could not be created.
    pub async fn launch_core(&self, instance: &Instance) -> Result<String, ProcessError> {
        let invocation = invocation::run_core(instance, &self.config);
        let id = self
            .invoke(Operation::LaunchCore, &invocation)
            .await?
            .trim()
            .to_string();
        tracing::info!(slug = %instance.slug, container = %id, "core started");
        Ok(id)
    }

    /// Start the UI container, returning its id or `None` on failure.
    pub async fn launch_ui(&self, instance: &Instance) -> Option<String> {
        let invocation = invocation::run_ui(instance, &self.config);
        let result = self
            .invoke(Operation::LaunchUi, &invocation)
            .await
            .map(|out| Some(out.trim().to_string()));
        let id = fall_back(Operation::LaunchUi, result, || None);
        if let Some(id) = &id {
            tracing::info!(slug = %instance.slug, container = %id, "ui started");
        }
        id
    }
}
