//! `botfleet port`: ask the host for a free TCP port.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;

/// Run the port command.
///
/// # Errors
///
/// Returns an error if the port script fails or prints something other
/// than a port number.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let port = app.process.allocate_port().await?;
    app.renderer().render_port(port)?;
    Ok(ExitCode::SUCCESS)
}
