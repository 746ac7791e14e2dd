//! Command implementations

pub mod config;
pub mod names;
pub mod pairlist;
pub mod port;
pub mod start;
pub mod status;
pub mod stop;
pub mod version;

use std::path::PathBuf;

use anyhow::Result;
use botfleet_common::{Instance, InstanceError};
use clap::Args;

use crate::domain::error::{ConfigError, ProcessError};
use crate::infra::instance_file;

/// Positional instance record argument shared by per-instance commands.
#[derive(Args)]
pub struct InstanceArgs {
    /// Path to the instance record (YAML, or JSON with a `.json` extension)
    pub instance: PathBuf,
}

impl InstanceArgs {
    /// Load and validate the instance record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read, parsed, or validated.
    pub fn load(&self) -> Result<Instance> {
        instance_file::load_instance(&self.instance)
    }
}

/// Machine-readable code for a command failure, used in `--json` error output.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<ProcessError>() {
        e.code()
    } else if err.downcast_ref::<ConfigError>().is_some() {
        "INVALID_CONFIG"
    } else if err.downcast_ref::<InstanceError>().is_some() {
        "INVALID_INSTANCE"
    } else {
        "ERROR"
    }
}
