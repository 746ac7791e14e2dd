//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed object on
//! stdout. Failures use the error object produced by [`format_error`].

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::application::{InstanceStatus, LaunchedInstance};
use crate::domain::config::OrchestratorConfig;
use crate::domain::naming::ContainerNames;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Renders results as machine-readable JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render the container names of an instance.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_names(names: &ContainerNames) -> Result<()> {
        emit(&json!(names))
    }

    /// Render an allocated host port.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_port(port: u16) -> Result<()> {
        emit(&json!({ "port": port }))
    }

    /// Render a pairlist.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_pairlist(slug: &str, pairs: &[String]) -> Result<()> {
        emit(&json!({ "slug": slug, "pairs": pairs }))
    }

    /// Render the container ids of a launched instance.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_launched(slug: &str, launched: &LaunchedInstance) -> Result<()> {
        emit(&json!({ "slug": slug, "core": launched.core, "ui": launched.ui }))
    }

    /// Render the containers a stop request targeted.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_stopped(slug: &str, containers: &[&str]) -> Result<()> {
        emit(&json!({ "slug": slug, "stopped": containers }))
    }

    /// Render liveness of both containers.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_status(slug: &str, names: &ContainerNames, status: InstanceStatus) -> Result<()> {
        emit(&json!({
            "slug": slug,
            "core": { "name": names.core, "running": status.core },
            "ui": { "name": names.ui, "running": status.ui },
        }))
    }

    /// Render the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(config: &OrchestratorConfig, path: &Path) -> Result<()> {
        emit(&json!({ "path": path, "config": config }))
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_version(version: &str) -> Result<()> {
        emit(&json!({ "version": version }))
    }
}

fn emit(value: &serde_json::Value) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("JSON serialization failed")?
    );
    Ok(())
}
