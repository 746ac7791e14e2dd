//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;
use crate::output::OutputContext;

/// Launch, stop and inspect containerised trading-bot instances
#[derive(Parser)]
#[command(
    name = "botfleet",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also honoured via the `NO_COLOR` env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log every container runtime invocation to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file location [default: ~/.botfleet/config.yaml]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Allocate a free host port
    Port,

    /// Fetch the recommended pairlist for an instance
    Pairlist(commands::pairlist::PairlistArgs),

    /// Launch an instance's core container and UI
    Start(commands::start::StartArgs),

    /// Stop and remove an instance's containers
    Stop(commands::stop::StopArgs),

    /// Show whether an instance's containers are running
    Status(commands::InstanceArgs),

    /// Print the container names for an instance
    Names(commands::InstanceArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            config,
            command,
        } = self;

        if let Command::Version = command {
            return commands::version::run(&OutputContext::new(no_color, quiet), json);
        }

        let app = AppContext::new(AppFlags {
            no_color,
            quiet,
            json,
            config,
        })?;

        match command {
            Command::Port => commands::port::run(&app).await,
            Command::Pairlist(args) => commands::pairlist::run(&app, &args).await,
            Command::Start(args) => commands::start::run(&app, &args).await,
            Command::Stop(args) => commands::stop::run(&app, &args).await,
            Command::Status(args) => commands::status::run(&app, &args).await,
            Command::Names(args) => commands::names::run(&app, &args),
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Version => commands::version::run(&app.output, json),
        }
    }
}
