//! `botfleet names`: print the container names derived from an instance.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::commands::InstanceArgs;
use crate::domain::naming::ContainerNames;

/// Run the names command.
///
/// # Errors
///
/// Returns an error if the instance record cannot be loaded.
pub fn run(app: &AppContext, args: &InstanceArgs) -> Result<ExitCode> {
    let instance = args.load()?;
    app.renderer()
        .render_names(&ContainerNames::for_instance(&instance))?;
    Ok(ExitCode::SUCCESS)
}
