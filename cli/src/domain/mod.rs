//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod invocation;
pub mod naming;
pub mod pairlist;
pub mod policy;

pub use config::{OrchestratorConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, ProcessError};
pub use invocation::Invocation;
pub use naming::ContainerNames;
pub use policy::{FailurePolicy, Operation};
