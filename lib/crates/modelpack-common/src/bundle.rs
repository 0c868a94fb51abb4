// lib/crates/modelpack-common/src/bundle.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record written as `modelpack.yml` into every saved bundle directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleRecord {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub service: BundleService,
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
    pub env: BundleEnv,
    #[serde(default)]
    pub artifacts: Vec<ArtifactRecord>,
}

/// Identity of the saved service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleService {
    pub name: String,
    pub version: String,
}

/// Environment summary as declared at save time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleEnv {
    #[serde(rename = "pipDependencies", default)]
    pub pip_dependencies: Vec<String>,
    #[serde(rename = "setupSh", default)]
    pub setup_sh: bool,
}

/// One artifact file and the SHA-256 of its exact bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub file: String,
    pub sha256: String,
    #[serde(default)]
    pub executable: bool,
}
