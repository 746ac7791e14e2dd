use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum slug length. Keeps derived container names well under the
/// runtime's hostname limits.
pub const MAX_SLUG_LEN: usize = 63;

/// One trading-bot instance as stored by the management application.
///
/// The orchestrator only ever reads this value; persistence and editing
/// belong to whoever owns the instance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Stable identifier, embedded in every runtime resource name.
    pub slug: String,
    /// Strategy asset name, resolved to `strategies/<strategy>.py` on the host.
    pub strategy: String,
    pub config: InstanceConfig,
    pub parameters: InstanceParameters,
    pub files: InstanceFiles,
    pub directories: InstanceDirectories,
}

/// Engine configuration. Only `stake_currency` is interpreted here; every
/// other key is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceConfig {
    pub stake_currency: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceParameters {
    pub ports: InstancePorts,
}

/// Host ports published by the core (`api`) and UI (`ui`) containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstancePorts {
    pub api: u16,
    pub ui: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceFiles {
    pub host: HostFiles,
}

/// Host-side files bind-mounted into the core container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostFiles {
    pub config: PathBuf,
    pub logs: PathBuf,
    pub db_dry_run: PathBuf,
    pub db_production: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceDirectories {
    pub host: HostDirectories,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostDirectories {
    /// Engine `user_data` directory.
    pub data: PathBuf,
}

/// Errors raised while validating an instance record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstanceError {
    #[error(
        "Invalid instance slug '{0}': must match ^[a-z0-9]([a-z0-9-]{{0,61}}[a-z0-9])?$"
    )]
    InvalidSlug(String),

    #[error("Instance '{slug}' has no stake currency configured.")]
    MissingStakeCurrency { slug: String },

    #[error("Instance '{slug}' has no strategy configured.")]
    MissingStrategy { slug: String },
}

impl Instance {
    /// Check the fields the orchestrator relies on.
    pub fn validate(&self) -> Result<(), InstanceError> {
        validate_slug(&self.slug)?;
        if self.strategy.trim().is_empty() {
            return Err(InstanceError::MissingStrategy {
                slug: self.slug.clone(),
            });
        }
        if self.config.stake_currency.trim().is_empty() {
            return Err(InstanceError::MissingStakeCurrency {
                slug: self.slug.clone(),
            });
        }
        Ok(())
    }
}

/// Validate that a slug is safe to embed in container names.
///
/// Accepts 1-63 lowercase ASCII alphanumerics and `-`, starting and ending
/// with an alphanumeric.
pub fn validate_slug(slug: &str) -> Result<(), InstanceError> {
    let bytes = slug.as_bytes();
    let valid = !bytes.is_empty()
        && bytes.len() <= MAX_SLUG_LEN
        && bytes
            .iter()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase() || *b == b'-')
        && bytes.first() != Some(&b'-')
        && bytes.last() != Some(&b'-');
    if valid {
        Ok(())
    } else {
        Err(InstanceError::InvalidSlug(slug.to_string()))
    }
}
