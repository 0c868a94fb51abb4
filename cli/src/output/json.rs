//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed JSON document
//! on stdout. Failures use the error object produced by [`format_error`].

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::services::inspect::Inspection;
use crate::application::services::save::SaveOutcome;
use crate::domain::config::PackConfig;
use crate::domain::error::{ArtifactError, BundleError, ConfigError, EnvError, ManifestError};

/// Code reported for errors that carry no typed domain error.
pub const GENERIC_ERROR_CODE: &str = "ERROR";

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Machine-readable code for the first typed domain error in `err`'s chain.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<EnvError>() {
            return e.code();
        }
        if let Some(e) = cause.downcast_ref::<ArtifactError>() {
            return e.code();
        }
        if let Some(e) = cause.downcast_ref::<ManifestError>() {
            return e.code();
        }
        if let Some(e) = cause.downcast_ref::<BundleError>() {
            return e.code();
        }
        if let Some(e) = cause.downcast_ref::<ConfigError>() {
            return e.code();
        }
    }
    GENERIC_ERROR_CODE
}

/// Renders results as JSON documents on stdout.
pub struct JsonRenderer;

#[allow(clippy::unused_self)] // uniform call shape with HumanRenderer
impl JsonRenderer {
    fn print(value: &impl Serialize) -> Result<()> {
        let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
        println!("{out}");
        Ok(())
    }

    /// Render the result of a save.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_save(&self, outcome: &SaveOutcome) -> Result<()> {
        Self::print(outcome)
    }

    /// Render a bundle inspection, adding an overall `intact` flag.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_inspection(&self, inspection: &Inspection) -> Result<()> {
        let mut value =
            serde_json::to_value(inspection).context("JSON serialization failed")?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("intact".to_string(), inspection.is_intact().into());
        }
        Self::print(&value)
    }

    /// Render configuration with its file path.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &PackConfig, path: &std::path::Path) -> Result<()> {
        Self::print(&serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
        }))
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        Self::print(&serde_json::json!({ "version": version }))
    }
}
