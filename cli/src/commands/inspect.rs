//! `modelpack inspect` — verify a saved bundle against its record.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::inspect::inspect_bundle;

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// Bundle directory (`<output>/<name>/<version>`)
    pub bundle: PathBuf,
}

/// Run the inspect command. Exits with failure when any artifact is
/// missing, changed, or lost its execute bit.
///
/// # Errors
///
/// Returns an error if the directory is not a bundle or cannot be read.
pub fn run(app: &AppContext, args: &InspectArgs) -> Result<ExitCode> {
    let inspection = inspect_bundle(&app.fs, &args.bundle)?;
    app.renderer().render_inspection(&inspection)?;
    if inspection.is_intact() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
