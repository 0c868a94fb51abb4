//! Domain types and validators for modelpack configuration.
//!
//! Pure functions only — no I/O, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["save.output_dir", "log.level", "log.json"];
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
pub const VALID_BOOLS: &[&str] = &["true", "false"];
const NON_EMPTY_PATH: &[&str] = &["<non-empty path>"];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.modelpack/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PackConfig {
    /// Save defaults.
    #[serde(default)]
    pub save: SaveConfig,
    /// Diagnostic logging.
    #[serde(default)]
    pub log: LogConfig,
}

/// Save configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveConfig {
    /// Base directory bundles are saved under when `--output` is omitted.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "./saved".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level written to stderr.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable log lines.
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
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
    let allowed = match key {
        "log.level" => VALID_LOG_LEVELS,
        "log.json" => VALID_BOOLS,
        "save.output_dir" if value.trim().is_empty() => NON_EMPTY_PATH,
        _ => return Ok(()),
    };
    if !allowed.contains(&value) {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            valid: allowed.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Apply a validated `key = value` to `config`.
///
/// # Errors
///
/// Returns an error if the key or value fails validation.
pub fn apply_config_value(config: &mut PackConfig, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;
    match key {
        "save.output_dir" => config.save.output_dir = value.to_string(),
        "log.level" => config.log.level = value.to_string(),
        "log.json" => config.log.json = value == "true",
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
