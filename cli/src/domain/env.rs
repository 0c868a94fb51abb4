//! Environment declaration for a service type — pure data, no I/O.
//!
//! Resolving a setup script from the filesystem happens in
//! `application::services::environment`; this module only holds the
//! normalized result.

use std::path::PathBuf;

/// Explicit origin of a setup script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// Literal shell text.
    Inline(String),
    /// Path to a file whose content is the script.
    File(PathBuf),
}

/// Normalized packaging declaration for one service type.
///
/// Immutable once built: dependencies keep insertion order (duplicates
/// included) and the setup script is always resolved text, never a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSpec {
    pip_dependencies: Vec<String>,
    setup_script: Option<String>,
}

impl EnvironmentSpec {
    #[must_use]
    pub fn new(pip_dependencies: Vec<String>, setup_script: Option<String>) -> Self {
        Self {
            pip_dependencies,
            setup_script,
        }
    }

    /// Declared pip dependencies in declaration order.
    #[must_use]
    pub fn pip_dependencies(&self) -> &[String] {
        &self.pip_dependencies
    }

    /// Resolved setup script text, if one was declared.
    #[must_use]
    pub fn setup_script(&self) -> Option<&str> {
        self.setup_script.as_deref()
    }

    #[must_use]
    pub fn has_dependency(&self, name: &str) -> bool {
        self.pip_dependencies.iter().any(|d| d == name)
    }

    /// `true` when saving this spec produces no artifact files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pip_dependencies.is_empty() && self.setup_script.is_none()
    }
}
