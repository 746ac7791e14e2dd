//! `botfleet pairlist`: scrape the recommended trading pairs for an instance.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::InstanceArgs;
use crate::domain::pairlist::DEFAULT_PAIR_COUNT;

/// Arguments for the pairlist command.
#[derive(Args)]
pub struct PairlistArgs {
    #[command(flatten)]
    pub instance: InstanceArgs,

    /// Maximum number of pairs to return
    #[arg(long, default_value_t = DEFAULT_PAIR_COUNT)]
    pub count: usize,
}

/// Run the pairlist command.
///
/// A failed scrape yields an empty list rather than an error.
///
/// # Errors
///
/// Returns an error if the instance record cannot be loaded.
pub async fn run(app: &AppContext, args: &PairlistArgs) -> Result<ExitCode> {
    let instance = args.instance.load()?;
    let pairs = app.process.fetch_pairlist(&instance, args.count).await;
    app.renderer().render_pairlist(&instance.slug, &pairs)?;
    Ok(ExitCode::SUCCESS)
}
