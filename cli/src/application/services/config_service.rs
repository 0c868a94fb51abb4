//! Application service — configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{PackConfig, apply_config_value};

/// Load configuration.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(store: &impl ConfigStore) -> Result<PackConfig> {
    store.load()
}

/// Save configuration.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_config(store: &impl ConfigStore, config: &PackConfig) -> Result<()> {
    store.save(config)
}

/// Validate and persist a single `key = value` setting, returning the
/// updated configuration.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or if the store fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<PackConfig> {
    let mut config = store.load()?;
    apply_config_value(&mut config, key, value)?;
    save_config(store, &config)?;
    Ok(config)
}
