//! `ConfigStore` backed by a YAML file.
//!
//! The file holds the `save.output_dir`, `log.level` and `log.json` keys.
//! Missing keys take their defaults, and a missing or blank file is the
//! default config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::PackConfig;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "MODELPACK_CONFIG";

/// Config file permissions; the file may name private output directories.
const CONFIG_MODE: u32 = 0o600;

pub struct YamlConfigStore;

/// Resolve the config location: a non-empty `MODELPACK_CONFIG`, else
/// `~/.modelpack/config.yaml`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_path(override_path: Option<&str>) -> Result<PathBuf> {
    match override_path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => Ok(PathBuf::from(p)),
        None => dirs::home_dir()
            .map(|home| home.join(".modelpack").join("config.yaml"))
            .context("cannot determine home directory; set MODELPACK_CONFIG"),
    }
}

fn parse_config(content: &str, path: &Path) -> Result<PackConfig> {
    if content.trim().is_empty() {
        return Ok(PackConfig::default());
    }
    serde_yaml::from_str(content).with_context(|| format!("cannot parse {}", path.display()))
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<PackConfig> {
        let path = self.path()?;
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(PackConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        parse_config(&content, &path)
    }

    fn save(&self, config: &PackConfig) -> Result<()> {
        let path = self.path()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(config).context("cannot serialize config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("cannot write {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(CONFIG_MODE))
                .with_context(|| format!("cannot set permissions on {}", path.display()))?;
        }
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    fn path(&self) -> Result<PathBuf> {
        config_path(std::env::var(CONFIG_ENV).ok().as_deref())
    }
}
