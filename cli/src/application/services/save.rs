//! Application service — save a declared service as a bundle directory.
//!
//! Steps:
//! 1. Read and validate `service.yaml`
//! 2. Declare the environment (setup script resolved against the manifest dir)
//! 3. Pick the bundle version and directory `<base>/<name>/<version>`
//! 4. Write `requirements.txt` / `setup.sh` via `ArtifactWriter`
//! 5. Write the `modelpack.yml` bundle record

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use modelpack_common::bundle::BundleRecord;
use modelpack_common::service::ServiceManifest;
use serde::Serialize;

use crate::application::ports::{LocalFs, ProgressReporter};
use crate::application::services::artifact_writer::ArtifactWriter;
use crate::application::services::environment::declare_environment;
use crate::domain::artifacts::{self, REQUIREMENTS_TXT, SETUP_SH};
use crate::domain::bundle::{BUNDLE_RECORD, build_record};
use crate::domain::error::{BundleError, ManifestError};
use crate::domain::service::{
    ServiceDefinition, bundle_dir, generate_version, is_valid_service_name, is_valid_version,
    validate_manifest,
};

/// Inputs to a save.
pub struct SaveRequest<'a> {
    /// Path to `service.yaml`.
    pub manifest_path: &'a Path,
    /// Directory bundles are saved under.
    pub base_dir: &'a Path,
    /// Overrides `metadata.version` when set.
    pub version: Option<&'a str>,
}

/// Result of a successful save.
#[derive(Debug, Clone, Serialize)]
pub struct SaveOutcome {
    pub bundle_dir: PathBuf,
    pub record: BundleRecord,
}

/// Read, validate and declare the service described by `manifest_path`.
///
/// # Errors
///
/// Returns an error if the manifest is missing, unparsable or invalid, or
/// if its setup script cannot be resolved.
pub fn load_service(fs: &impl LocalFs, manifest_path: &Path) -> Result<ServiceDefinition> {
    if !fs.is_file(manifest_path) {
        return Err(ManifestError::NotFound(manifest_path.display().to_string()).into());
    }
    let content = fs.read_to_string(manifest_path)?;
    let manifest: ServiceManifest = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse {}", manifest_path.display()))?;
    validate_manifest(&manifest)?;

    let base = manifest_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let env = declare_environment(fs, &manifest.env, base)
        .with_context(|| format!("declaring environment for '{}'", manifest.metadata.name))?;

    Ok(ServiceDefinition {
        name: manifest.metadata.name,
        version: manifest.metadata.version,
        env,
    })
}

/// Save the service described by a `service.yaml`.
///
/// # Errors
///
/// See [`load_service`] and [`save_definition`].
pub fn save_service(
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    request: &SaveRequest<'_>,
    now: DateTime<Utc>,
) -> Result<SaveOutcome> {
    reporter.step(&format!("reading {}...", request.manifest_path.display()));
    let service = load_service(fs, request.manifest_path)?;
    save_definition(fs, reporter, &service, request.base_dir, request.version, now)
}

/// Save an already declared service under `base_dir` and return the bundle
/// directory.
///
/// # Errors
///
/// Returns an error if the name or version is invalid, the bundle already
/// exists, the environment is malformed, or any write fails. Files written
/// before a failure are left in place.
pub fn save_definition(
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
    service: &ServiceDefinition,
    base_dir: &Path,
    version_override: Option<&str>,
    now: DateTime<Utc>,
) -> Result<SaveOutcome> {
    if !is_valid_service_name(&service.name) {
        return Err(ManifestError::ValidationFailed(format!(
            "  - service name '{}' must be lowercase alphanumeric with hyphens",
            service.name
        ))
        .into());
    }
    let version = match version_override.or(service.version.as_deref()) {
        Some(v) => {
            anyhow::ensure!(is_valid_version(v), "invalid bundle version: '{v}'");
            v.to_string()
        }
        None => generate_version(now),
    };

    let dir = bundle_dir(base_dir, &service.name, &version);
    let record_path = dir.join(BUNDLE_RECORD);
    if fs.exists(&record_path) {
        return Err(BundleError::AlreadyExists(dir.display().to_string()).into());
    }

    let files = artifacts::plan(&service.env)?;
    if files.is_empty() {
        reporter.warn("no pip dependencies or setup script declared");
    }

    reporter.step(&format!("writing artifacts to {}...", dir.display()));
    remove_stale_artifacts(fs, &dir, &files)?;
    ArtifactWriter::new(fs).write_files(&files, &dir)?;

    let record = build_record(service, &version, &files, now);
    let yaml = serde_yaml::to_string(&record).context("cannot serialize bundle record")?;
    fs.write(&record_path, yaml.as_bytes())
        .with_context(|| format!("writing {}", record_path.display()))?;

    tracing::info!(
        service = %service.name,
        version = %version,
        artifacts = files.len(),
        dir = %dir.display(),
        "bundle saved"
    );
    reporter.success(&format!("saved {}:{version}", service.name));

    Ok(SaveOutcome {
        bundle_dir: dir,
        record,
    })
}

/// Delete artifacts left in `dir` by an earlier, unfinished save that the
/// current plan does not produce. The record would not list them.
fn remove_stale_artifacts(
    fs: &impl LocalFs,
    dir: &Path,
    files: &[artifacts::ArtifactFile],
) -> Result<()> {
    for name in [REQUIREMENTS_TXT, SETUP_SH] {
        let path = dir.join(name);
        if files.iter().all(|f| f.name != name) && fs.is_file(&path) {
            tracing::warn!(path = %path.display(), "removing stale artifact");
            fs.remove_file(&path)?;
        }
    }
    Ok(())
}
