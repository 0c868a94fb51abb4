//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Environment errors ────────────────────────────────────────────────────────

/// Configuration errors raised while declaring or planning an environment.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("setup_sh file '{path}' exists but cannot be read: {source}")]
    SetupScriptUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("setup_sh file '{0}' not found")]
    SetupScriptMissing(String),

    #[error("invalid pip dependency {0:?}: entries must be non-empty single lines")]
    InvalidDependency(String),
}

// ── Artifact errors ───────────────────────────────────────────────────────────

/// I/O errors raised while materializing artifacts into a directory.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("destination directory '{path}' is not writable: {source}")]
    DirectoryNotWritable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to mark '{path}' executable: {source}")]
    PermissionsFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ── Manifest errors ───────────────────────────────────────────────────────────

/// Errors related to `service.yaml` declarations.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("No service.yaml found at: {0}")]
    NotFound(String),

    #[error("Service manifest validation failed:\n{0}")]
    ValidationFailed(String),
}

// ── Bundle errors ─────────────────────────────────────────────────────────────

/// Errors related to saved bundle directories.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Bundle already exists at {0}. Pass a different --version or remove it first.")]
    AlreadyExists(String),

    #[error("{0} is not a saved bundle (no modelpack.yml)")]
    NotABundle(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}

impl EnvError {
    /// Stable machine-readable code used by JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::SetupScriptUnreadable { .. }
            | Self::SetupScriptMissing(_)
            | Self::InvalidDependency(_) => "CONFIGURATION_ERROR",
        }
    }
}

impl ArtifactError {
    /// Stable machine-readable code used by JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::PermissionsFailed { .. } => "PERMISSION_ERROR",
            Self::DirectoryNotWritable { .. } | Self::WriteFailed { .. } => "IO_ERROR",
        }
    }
}

impl ManifestError {
    /// Stable machine-readable code used by JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "MANIFEST_NOT_FOUND",
            Self::ValidationFailed(_) => "INVALID_MANIFEST",
        }
    }
}

impl BundleError {
    /// Stable machine-readable code used by JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::AlreadyExists(_) => "BUNDLE_EXISTS",
            Self::NotABundle(_) => "NOT_A_BUNDLE",
        }
    }
}

impl ConfigError {
    /// Stable machine-readable code used by JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownKey { .. } => "UNKNOWN_SETTING",
            Self::InvalidValue { .. } => "INVALID_SETTING",
        }
    }
}
