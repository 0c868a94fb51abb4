//! Service declarations — pure manifest validation and bundle naming.
//!
//! All functions in this module are synchronous and take data in, returning
//! data out. Zero imports from `std::fs`, `crate::infra`, `crate::commands`,
//! or `crate::application`.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::Result;
use chrono::{DateTime, Utc};
use modelpack_common::service::ServiceManifest;
use regex::Regex;

use crate::domain::env::EnvironmentSpec;
use crate::domain::error::ManifestError;

pub const SERVICE_API_VERSION: &str = "modelpack.dev/v1";
pub const SERVICE_KIND: &str = "ModelService";

/// Checked before the name is used as a path component.
pub static SERVICE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$").expect("valid regex")
});

/// Bundle versions become a directory name, so no separators or `..`.
pub static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9._-]{0,63}$").expect("valid regex")
});

/// A declared service type: its identity plus the environment shared by
/// every instance of that type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDefinition {
    pub name: String,
    pub version: Option<String>,
    pub env: EnvironmentSpec,
}

#[must_use]
pub fn is_valid_service_name(name: &str) -> bool {
    SERVICE_NAME_RE.is_match(name)
}

#[must_use]
pub fn is_valid_version(version: &str) -> bool {
    VERSION_RE.is_match(version) && !version.contains("..")
}

/// Validate a parsed `ServiceManifest`. Returns `Ok(())` or an error listing
/// every violation.
///
/// # Errors
///
/// Returns [`ManifestError::ValidationFailed`] if any check fails.
pub fn validate_manifest(manifest: &ServiceManifest) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if manifest.api_version != SERVICE_API_VERSION {
        errors.push(format!(
            "Unsupported apiVersion '{}'. Expected {SERVICE_API_VERSION}",
            manifest.api_version
        ));
    }

    if manifest.kind != SERVICE_KIND {
        errors.push(format!(
            "Unsupported kind '{}'. Expected {SERVICE_KIND}",
            manifest.kind
        ));
    }

    if !is_valid_service_name(&manifest.metadata.name) {
        errors.push(format!(
            "metadata.name '{}' must be lowercase alphanumeric with hyphens",
            manifest.metadata.name
        ));
    }

    if let Some(version) = &manifest.metadata.version
        && !is_valid_version(version)
    {
        errors.push(format!(
            "metadata.version '{version}' may only contain letters, digits, '.', '_' and '-'"
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ManifestError::ValidationFailed(
            errors
                .iter()
                .map(|e| format!("  - {e}"))
                .collect::<Vec<_>>()
                .join("\n"),
        )
        .into())
    }
}

/// Generate a bundle version: UTC timestamp plus 8 random hex chars,
/// e.g. `20260116093012_5f1a9c2e`.
#[must_use]
pub fn generate_version(now: DateTime<Utc>) -> String {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};

    let mut hasher = RandomState::new().build_hasher();
    hasher.write_i64(now.timestamp_nanos_opt().unwrap_or_default());
    hasher.write_u64(RandomState::new().build_hasher().finish());
    let suffix = hasher.finish() & 0xffff_ffff;
    format!("{}_{suffix:08x}", now.format("%Y%m%d%H%M%S"))
}

/// `<base>/<name>/<version>`.
#[must_use]
pub fn bundle_dir(base: &Path, name: &str, version: &str) -> PathBuf {
    base.join(name).join(version)
}
