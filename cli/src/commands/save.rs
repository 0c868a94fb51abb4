//! `modelpack save` — write a service's environment artifacts into a bundle.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::save::{SaveRequest, save_service};
use crate::output::reporter::{SilentReporter, TerminalReporter};

/// Arguments for the save command.
#[derive(Args)]
pub struct SaveArgs {
    /// Path to the service.yaml manifest
    pub manifest: PathBuf,

    /// Directory bundles are saved under [default: config save.output_dir]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Bundle version (overrides metadata.version; generated when neither is set)
    #[arg(long)]
    pub version: Option<String>,
}

/// Run the save command.
///
/// # Errors
///
/// Returns an error if the manifest is invalid or any artifact cannot be
/// written.
pub fn run(app: &AppContext, args: &SaveArgs) -> Result<ExitCode> {
    let base_dir = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&app.config.save.output_dir));
    let request = SaveRequest {
        manifest_path: &args.manifest,
        base_dir: &base_dir,
        version: args.version.as_deref(),
    };
    let now = chrono::Utc::now();

    let outcome = if app.is_json() {
        save_service(&app.fs, &SilentReporter, &request, now)?
    } else {
        save_service(&app.fs, &TerminalReporter::new(&app.output), &request, now)?
    };
    app.renderer().render_save(&outcome)?;
    Ok(ExitCode::SUCCESS)
}
