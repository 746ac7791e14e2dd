//! Version command

use std::process::ExitCode;

use anyhow::Result;

use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Run the version command.
///
/// Does not need an `AppContext`, so it works with a broken config file.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(ctx: &OutputContext, json: bool) -> Result<ExitCode> {
    let renderer = if json {
        Renderer::Json(JsonRenderer)
    } else {
        Renderer::Human(HumanRenderer::new(ctx))
    };
    renderer.render_version(env!("CARGO_PKG_VERSION"))?;
    Ok(ExitCode::SUCCESS)
}
