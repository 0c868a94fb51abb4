//! Saved-bundle records — building and checking `modelpack.yml`.
//!
//! Pure functions only; file contents are passed in by the caller.

use chrono::{DateTime, Utc};
use modelpack_common::bundle::{ArtifactRecord, BundleEnv, BundleRecord, BundleService};
use serde::Serialize;

use crate::domain::artifacts::{ArtifactFile, REQUIREMENTS_TXT, SETUP_SH, content_digest};
use crate::domain::service::{SERVICE_API_VERSION, ServiceDefinition};

/// File name of the bundle record.
pub const BUNDLE_RECORD: &str = "modelpack.yml";

pub const BUNDLE_KIND: &str = "SavedService";

/// Build the record describing a bundle saved at `saved_at`.
#[must_use]
pub fn build_record(
    service: &ServiceDefinition,
    version: &str,
    files: &[ArtifactFile],
    saved_at: DateTime<Utc>,
) -> BundleRecord {
    BundleRecord {
        api_version: SERVICE_API_VERSION.to_string(),
        kind: BUNDLE_KIND.to_string(),
        service: BundleService {
            name: service.name.clone(),
            version: version.to_string(),
        },
        saved_at,
        env: BundleEnv {
            pip_dependencies: service.env.pip_dependencies().to_vec(),
            setup_sh: service.env.setup_script().is_some(),
        },
        artifacts: files
            .iter()
            .map(|f| ArtifactRecord {
                file: f.name.to_string(),
                sha256: content_digest(f.content.as_bytes()),
                executable: f.executable,
            })
            .collect(),
    }
}

/// Observed state of one recorded artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStatus {
    Ok,
    Missing,
    DigestMismatch,
    NotExecutable,
    /// The record names a file that is not a bundle artifact.
    Unrecognized,
}

impl ArtifactStatus {
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

/// Whether `file` is one of the artifact names a save can record. Anything
/// else (other names, nested or absolute paths) must not be read.
#[must_use]
pub fn is_bundle_artifact(file: &str) -> bool {
    file == REQUIREMENTS_TXT || file == SETUP_SH
}

/// Compare one record entry against what is on disk.
///
/// `content` is `None` when the file does not exist. A digest mismatch takes
/// precedence over a missing execute bit.
#[must_use]
pub fn check_artifact(
    record: &ArtifactRecord,
    content: Option<&[u8]>,
    executable: bool,
) -> ArtifactStatus {
    let Some(bytes) = content else {
        return ArtifactStatus::Missing;
    };
    if content_digest(bytes) != record.sha256 {
        return ArtifactStatus::DigestMismatch;
    }
    if record.executable && !executable {
        return ArtifactStatus::NotExecutable;
    }
    ArtifactStatus::Ok
}
