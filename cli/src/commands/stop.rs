//! `botfleet stop`: kill and remove an instance's containers.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::InstanceArgs;
use crate::domain::naming::ContainerNames;

/// Arguments for the stop command.
#[derive(Args)]
pub struct StopArgs {
    #[command(flatten)]
    pub instance: InstanceArgs,

    /// Stop only the core container
    #[arg(long, conflicts_with = "ui")]
    pub core: bool,

    /// Stop only the UI container
    #[arg(long)]
    pub ui: bool,
}

/// Run the stop command.
///
/// Stopping never fails once the instance is loaded: missing containers
/// and runtime errors are logged and skipped.
///
/// # Errors
///
/// Returns an error if the instance record cannot be loaded.
pub async fn run(app: &AppContext, args: &StopArgs) -> Result<ExitCode> {
    let instance = args.instance.load()?;
    let names = ContainerNames::for_instance(&instance);

    let targets: Vec<&str> = if args.core {
        app.process.stop_core(&instance).await;
        vec![names.core.as_str()]
    } else if args.ui {
        app.process.stop_ui(&instance).await;
        vec![names.ui.as_str()]
    } else {
        app.process.stop(&instance).await;
        vec![names.core.as_str(), names.ui.as_str()]
    };

    app.renderer().render_stopped(&instance.slug, &targets)?;
    Ok(ExitCode::SUCCESS)
}
