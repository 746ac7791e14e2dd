//! Orchestrator configuration schema and validators.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "runtime",
    "domain",
    "project_dir",
    "host_manager_dir",
    "scripts_dir",
    "images.core",
    "images.ui",
    "images.scraper",
    "command_timeout_secs",
];

/// Value accepted by `command_timeout_secs` to clear the timeout.
pub const NO_TIMEOUT: &str = "none";

// ── Config schema ────────────────────────────────────────────────────────────

/// Deployment-level settings shared by every instance.
///
/// Stored in `~/.botfleet/config.yaml`. Everything else the invocations
/// need (mount targets, internal ports, entrypoint paths) is fixed by the
/// runtime images and lives in `domain::invocation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Container runtime binary.
    pub runtime: String,
    /// Public domain handed to the UI container.
    pub domain: String,
    /// Management project checkout; holds `scripts/generate-random-available-port.sh`.
    pub project_dir: PathBuf,
    /// Host directory holding `strategies/<name>.py`.
    pub host_manager_dir: PathBuf,
    /// Directory with the scraper script and UI entrypoint.
    pub scripts_dir: PathBuf,
    pub images: ImagesConfig,
    /// Optional per-invocation timeout. Unset means wait indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_timeout_secs: Option<u64>,
}

/// Images used for each container role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    pub core: String,
    pub ui: String,
    pub scraper: String,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            runtime: "docker".to_string(),
            domain: "localhost".to_string(),
            project_dir: PathBuf::from("/opt/freqtrade-manager"),
            host_manager_dir: PathBuf::from("/opt/freqtrade-manager"),
            scripts_dir: PathBuf::from("/tmp/freqtrade-manager/scripts"),
            images: ImagesConfig::default(),
            command_timeout_secs: None,
        }
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            core: "ph3nol/freqtrade:latest".to_string(),
            ui: "ph3nol/freqtrade-ui:latest".to_string(),
            scraper: "alekzonder/puppeteer:latest".to_string(),
        }
    }
}

impl OrchestratorConfig {
    /// Every setting as `(key, value)` in the form `set` accepts.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("runtime", self.runtime.clone()),
            ("domain", self.domain.clone()),
            ("project_dir", self.project_dir.display().to_string()),
            ("host_manager_dir", self.host_manager_dir.display().to_string()),
            ("scripts_dir", self.scripts_dir.display().to_string()),
            ("images.core", self.images.core.clone()),
            ("images.ui", self.images.ui.clone()),
            ("images.scraper", self.images.scraper.clone()),
            (
                "command_timeout_secs",
                self.command_timeout_secs
                    .map_or_else(|| NO_TIMEOUT.to_string(), |s| s.to_string()),
            ),
        ]
    }

    /// Check every setting against the same rules `set` applies, so a
    /// hand-edited file cannot carry values `config set` would refuse.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in self.entries() {
            validate_config_value(key, &value)?;
        }
        Ok(())
    }

    /// Apply a validated `key = value` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "runtime" => self.runtime = value.to_string(),
            "domain" => self.domain = value.to_string(),
            "project_dir" => self.project_dir = PathBuf::from(value),
            "host_manager_dir" => self.host_manager_dir = PathBuf::from(value),
            "scripts_dir" => self.scripts_dir = PathBuf::from(value),
            "images.core" => self.images.core = value.to_string(),
            "images.ui" => self.images.ui = value.to_string(),
            "images.scraper" => self.images.scraper = value.to_string(),
            "command_timeout_secs" => {
                self.command_timeout_secs = if value == NO_TIMEOUT {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let invalid = |expected: &str| -> Result<()> {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
        .into())
    };

    match key {
        "project_dir" | "host_manager_dir" | "scripts_dir" if !value.starts_with('/') => {
            invalid("Expected an absolute path.")
        }
        "command_timeout_secs" if value != NO_TIMEOUT => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(()),
            _ => invalid("Expected a positive number of seconds, or 'none'."),
        },
        _ if value.trim().is_empty() || value.chars().any(char::is_whitespace) => {
            invalid("Expected a non-empty value without whitespace.")
        }
        _ => Ok(()),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
