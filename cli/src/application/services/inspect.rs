//! Application service — verify a saved bundle against its record.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use modelpack_common::bundle::BundleRecord;
use serde::Serialize;

use crate::application::ports::LocalFs;
use crate::domain::bundle::{ArtifactStatus, BUNDLE_RECORD, check_artifact, is_bundle_artifact};
use crate::domain::error::BundleError;

/// Per-artifact verification result.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactCheck {
    pub file: String,
    pub status: ArtifactStatus,
}

/// Outcome of inspecting one bundle directory.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub bundle_dir: PathBuf,
    pub record: BundleRecord,
    pub checks: Vec<ArtifactCheck>,
}

impl Inspection {
    /// `true` when every recorded artifact is present and intact.
    #[must_use]
    pub fn is_intact(&self) -> bool {
        self.checks.iter().all(|c| c.status.is_ok())
    }
}

/// Read `modelpack.yml` from `dir` and check every artifact it lists.
///
/// Entries naming anything but `requirements.txt` or `setup.sh` are
/// reported as [`ArtifactStatus::Unrecognized`] without touching the file.
///
/// # Errors
///
/// Returns [`BundleError::NotABundle`] when `dir` has no record, or an error
/// if the record cannot be parsed or a present file cannot be read.
pub fn inspect_bundle(fs: &impl LocalFs, dir: &Path) -> Result<Inspection> {
    let record_path = dir.join(BUNDLE_RECORD);
    if !fs.is_file(&record_path) {
        return Err(BundleError::NotABundle(dir.display().to_string()).into());
    }
    let content = fs.read_to_string(&record_path)?;
    let record: BundleRecord = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse {}", record_path.display()))?;

    let mut checks = Vec::with_capacity(record.artifacts.len());
    for entry in &record.artifacts {
        let status = if is_bundle_artifact(&entry.file) {
            let path = dir.join(&entry.file);
            if fs.is_file(&path) {
                let bytes = fs.read(&path)?;
                let executable = fs.is_executable(&path)?;
                check_artifact(entry, Some(&bytes), executable)
            } else {
                check_artifact(entry, None, false)
            }
        } else {
            ArtifactStatus::Unrecognized
        };
        if !status.is_ok() {
            tracing::warn!(file = %entry.file, ?status, "artifact check failed");
        }
        checks.push(ArtifactCheck {
            file: entry.file.clone(),
            status,
        });
    }

    Ok(Inspection {
        bundle_dir: dir.to_path_buf(),
        record,
        checks,
    })
}
