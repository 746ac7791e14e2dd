//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::OrchestratorConfig;

/// Load configuration.
///
/// # Errors
///
/// Returns an error if the stored configuration cannot be read.
pub fn load_config(store: &impl ConfigStore) -> Result<OrchestratorConfig> {
    store.load()
}

/// Validate and apply `key = value`, then persist the result.
///
/// Nothing is written when validation fails.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or saving fails.
pub fn set_config_value(
    store: &impl ConfigStore,
    key: &str,
    value: &str,
) -> Result<OrchestratorConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    Ok(config)
}
