//! `botfleet status`: report whether an instance's containers are running.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::commands::InstanceArgs;
use crate::domain::naming::ContainerNames;

/// Run the status command.
///
/// Exits with code 1 when the core container is not running, so scripts
/// can use `botfleet status <instance> -q` as a health check.
///
/// # Errors
///
/// Returns an error if the instance record cannot be loaded or the
/// runtime cannot be queried.
pub async fn run(app: &AppContext, args: &InstanceArgs) -> Result<ExitCode> {
    let instance = args.load()?;
    let names = ContainerNames::for_instance(&instance);
    let status = app.process.status(&instance).await?;
    app.renderer().render_status(&instance.slug, &names, status)?;

    Ok(if status.core {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
