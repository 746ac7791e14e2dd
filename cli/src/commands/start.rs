//! `botfleet start`: launch the core container and, optionally, its UI.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::InstanceArgs;
use crate::domain::naming::ContainerNames;
use crate::output::progress;

/// Arguments for the start command.
#[derive(Args)]
pub struct StartArgs {
    #[command(flatten)]
    pub instance: InstanceArgs,

    /// Launch only the core container
    #[arg(long)]
    pub no_ui: bool,
}

/// Run the start command.
///
/// # Errors
///
/// Returns an error if the instance record cannot be loaded or the core
/// container fails to start. A UI failure is reported but not fatal.
pub async fn run(app: &AppContext, args: &StartArgs) -> Result<ExitCode> {
    let instance = args.instance.load()?;
    let names = ContainerNames::for_instance(&instance);
    let with_ui = !args.no_ui;

    let spinner = (app.output.show_progress() && !app.is_json())
        .then(|| progress::spinner(&format!("Launching {}...", instance.slug)));

    let launched = match app.process.launch(&instance, with_ui).await {
        Ok(launched) => launched,
        Err(e) => {
            if let Some(pb) = &spinner {
                progress::finish_error(pb, &format!("{} failed to launch", names.core));
            }
            return Err(e.into());
        }
    };

    if let Some(pb) = &spinner {
        progress::finish_ok(pb, &format!("{} started", names.core));
    }
    if with_ui && launched.ui.is_none() && !app.is_json() {
        app.output
            .warn(&format!("{} did not start (run with -v for details)", names.ui));
    }

    app.renderer()
        .render_launched(&instance.slug, &names, &launched)?;
    Ok(ExitCode::SUCCESS)
}
