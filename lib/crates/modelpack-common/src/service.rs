// lib/crates/modelpack-common/src/service.rs

use serde::{Deserialize, Serialize};

/// Service declaration manifest (`service.yaml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceManifest {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: ServiceMetadata,
    #[serde(default)]
    pub env: EnvConfig,
}

/// Metadata section of a service manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceMetadata {
    pub name: String,
    /// Pinned bundle version. A version is generated at save time when absent.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Packaging intent attached to a service type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvConfig {
    #[serde(default)]
    pub pip_dependencies: Option<PipDependencies>,
    #[serde(default)]
    pub setup_sh: Option<SetupScriptConfig>,
}

/// `pip_dependencies` accepts either a single package or a list of packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PipDependencies {
    One(String),
    Many(Vec<String>),
}

impl PipDependencies {
    /// Normalize into an ordered sequence. A single string becomes a
    /// one-element list; a list is kept as given, duplicates included.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(dep) => vec![dep],
            Self::Many(deps) => deps,
        }
    }
}

/// Source of the setup script.
///
/// `Text` is the bare-string form: it names a file if one exists at that
/// path, and is literal script content otherwise. `Path` and `Inline` state
/// the interpretation explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SetupScriptConfig {
    Path { path: String },
    Inline { inline: String },
    Text(String),
}
