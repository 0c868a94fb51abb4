//! Application service — environment declaration.
//!
//! Turns an `EnvConfig` (as written in `service.yaml` or built in code)
//! into an immutable `EnvironmentSpec`, reading setup scripts through the
//! `LocalFs` port.

use std::path::Path;

use anyhow::Result;
use modelpack_common::service::{EnvConfig, SetupScriptConfig};

use crate::application::ports::LocalFs;
use crate::application::services::io_source;
use crate::domain::env::{EnvironmentSpec, ScriptSource};
use crate::domain::error::EnvError;

/// Declare an environment from its configuration.
///
/// Relative script paths are resolved against `base_dir`. A bare
/// `setup_sh` string is read as a file when `base_dir.join(value)` is an
/// existing file and kept as literal script text otherwise.
///
/// # Errors
///
/// Returns [`EnvError::SetupScriptUnreadable`] if a script file exists but
/// cannot be read, or [`EnvError::SetupScriptMissing`] if an explicit
/// `path:` does not exist.
pub fn declare_environment(
    fs: &impl LocalFs,
    config: &EnvConfig,
    base_dir: &Path,
) -> Result<EnvironmentSpec> {
    let deps = config
        .pip_dependencies
        .clone()
        .map(modelpack_common::PipDependencies::into_vec)
        .unwrap_or_default();

    let script = match &config.setup_sh {
        None => None,
        Some(setup) => Some(resolve_setup_script(fs, setup, base_dir)?),
    };

    Ok(EnvironmentSpec::new(deps, script))
}

/// Resolve a `setup_sh` value to script text.
///
/// # Errors
///
/// See [`declare_environment`].
pub fn resolve_setup_script(
    fs: &impl LocalFs,
    setup: &SetupScriptConfig,
    base_dir: &Path,
) -> Result<String> {
    match setup {
        SetupScriptConfig::Inline { inline } => {
            load_script(fs, &ScriptSource::Inline(inline.clone()))
        }
        SetupScriptConfig::Path { path } => {
            let full = base_dir.join(path);
            if !fs.exists(&full) {
                return Err(EnvError::SetupScriptMissing(full.display().to_string()).into());
            }
            load_script(fs, &ScriptSource::File(full))
        }
        SetupScriptConfig::Text(value) => {
            let candidate = base_dir.join(value);
            if !value.is_empty() && fs.is_file(&candidate) {
                tracing::warn!(
                    path = %candidate.display(),
                    "setup_sh names an existing file; reading it as the script. \
                     Use `setup_sh: {{path: ...}}` or `{{inline: ...}}` to make this explicit"
                );
                load_script(fs, &ScriptSource::File(candidate))
            } else {
                tracing::debug!("setup_sh treated as inline script text");
                load_script(fs, &ScriptSource::Inline(value.clone()))
            }
        }
    }
}

/// Produce the script text for an explicit source.
///
/// # Errors
///
/// Returns [`EnvError::SetupScriptUnreadable`] if the file cannot be read.
pub fn load_script(fs: &impl LocalFs, source: &ScriptSource) -> Result<String> {
    match source {
        ScriptSource::Inline(text) => Ok(text.clone()),
        ScriptSource::File(path) => fs.read_to_string(path).map_err(|e| {
            EnvError::SetupScriptUnreadable {
                path: path.display().to_string(),
                source: io_source(e),
            }
            .into()
        }),
    }
}
