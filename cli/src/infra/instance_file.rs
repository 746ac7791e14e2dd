//! Reading instance records from disk.

use std::path::Path;

use anyhow::{Context, Result};
use botfleet_common::Instance;

/// Load and validate an instance record.
///
/// `.json` files are parsed as JSON; anything else as YAML.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
pub fn load_instance(path: &Path) -> Result<Instance> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let instance: Instance = if is_json {
        serde_json::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))?
    } else {
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))?
    };

    instance.validate()?;
    Ok(instance)
}
