//! Artifact generation — pure functions, no I/O.
//!
//! Each function takes an `EnvironmentSpec` and returns the exact bytes
//! that belong in the bundle directory. The caller is responsible for
//! writing to disk.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.

use sha2::{Digest, Sha256};

use crate::domain::env::EnvironmentSpec;
use crate::domain::error::EnvError;

/// Dependency list consumed by `pip install -r`.
pub const REQUIREMENTS_TXT: &str = "requirements.txt";

/// Setup script executed during image build.
pub const SETUP_SH: &str = "setup.sh";

/// Mode applied to `setup.sh`: rwx for owner, rx for group and other.
pub const SETUP_SH_MODE: u32 = 0o755;

/// One file to materialize in the destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFile {
    pub name: &'static str,
    pub content: String,
    pub executable: bool,
}

/// Generate `requirements.txt` content.
///
/// Dependencies are joined with `\n` in declaration order, with no trailing
/// newline. Returns `None` when no dependencies are declared, in which case
/// the file must not be created.
///
/// # Errors
///
/// Returns [`EnvError::InvalidDependency`] for an empty entry or one that
/// spans several lines, since either would corrupt the one-per-line layout.
pub fn requirements_txt(spec: &EnvironmentSpec) -> Result<Option<String>, EnvError> {
    let deps = spec.pip_dependencies();
    if deps.is_empty() {
        return Ok(None);
    }
    if let Some(bad) = deps
        .iter()
        .find(|d| d.trim().is_empty() || d.contains(['\n', '\r']))
    {
        return Err(EnvError::InvalidDependency(bad.clone()));
    }
    Ok(Some(deps.join("\n")))
}

/// Generate `setup.sh` content: the declared script text, byte for byte.
///
/// No shebang is added and line endings are left alone.
#[must_use]
pub fn setup_sh(spec: &EnvironmentSpec) -> Option<&str> {
    spec.setup_script()
}

/// Every artifact the environment produces, in write order.
///
/// # Errors
///
/// Propagates [`requirements_txt`] validation failures.
pub fn plan(spec: &EnvironmentSpec) -> Result<Vec<ArtifactFile>, EnvError> {
    let mut files = Vec::with_capacity(2);
    if let Some(content) = requirements_txt(spec)? {
        files.push(ArtifactFile {
            name: REQUIREMENTS_TXT,
            content,
            executable: false,
        });
    }
    if let Some(script) = setup_sh(spec) {
        files.push(ArtifactFile {
            name: SETUP_SH,
            content: script.to_string(),
            executable: true,
        });
    }
    Ok(files)
}

/// Lowercase hex SHA-256 of the given bytes.
#[must_use]
pub fn content_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
