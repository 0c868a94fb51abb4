//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod artifacts;
pub mod bundle;
pub mod config;
pub mod env;
pub mod error;
pub mod service;

pub use artifacts::{ArtifactFile, REQUIREMENTS_TXT, SETUP_SH, SETUP_SH_MODE};
pub use config::{PackConfig, validate_config_key, validate_config_value};
pub use env::{EnvironmentSpec, ScriptSource};
pub use error::{ArtifactError, BundleError, ConfigError, EnvError, ManifestError};
pub use service::ServiceDefinition;
