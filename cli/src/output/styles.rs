//! Terminal stylesheet.
//!
//! Every field starts as the no-op `Style::new()`; [`Styles::colorize`] fills
//! them in when the terminal accepts color.

use owo_colors::Style;

use crate::domain::bundle::ArtifactStatus;

#[derive(Default, Clone)]
pub struct Styles {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub info: Style,
    pub dim: Style,
    pub bold: Style,
    pub header: Style,
    /// Bundle directories and artifact file names.
    pub path: Style,
}

impl Styles {
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.error = Style::new().red();
        self.info = Style::new().blue();
        self.dim = Style::new().dimmed();
        self.bold = Style::new().bold();
        self.header = Style::new().bold().cyan();
        self.path = Style::new().underline();
    }

    /// Style for an inspection status. A file that changed on disk is a
    /// warning; one that is gone or foreign to the bundle is an error.
    #[must_use]
    pub fn for_status(&self, status: ArtifactStatus) -> Style {
        match status {
            ArtifactStatus::Ok => self.success,
            ArtifactStatus::DigestMismatch | ArtifactStatus::NotExecutable => self.warning,
            ArtifactStatus::Missing | ArtifactStatus::Unrecognized => self.error,
        }
    }
}
