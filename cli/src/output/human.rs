//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;

use crate::application::services::inspect::Inspection;
use crate::application::services::save::SaveOutcome;
use crate::domain::bundle::ArtifactStatus;
use crate::domain::config::PackConfig;
use crate::infra::config::CONFIG_ENV;
use crate::output::OutputContext;

/// Renders results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("modelpack {version}");
    }

    /// Render a completed save.
    pub fn render_save(&self, outcome: &SaveOutcome) {
        if self.ctx.quiet {
            // The bundle path is the one thing scripts need.
            println!("{}", outcome.bundle_dir.display());
            return;
        }
        println!();
        self.ctx.kv("Bundle:", &outcome.bundle_dir.display().to_string());
        self.ctx.kv("Service:", &outcome.record.service.name);
        self.ctx.kv("Version:", &outcome.record.service.version);
        if outcome.record.artifacts.is_empty() {
            self.ctx.kv("Artifacts:", "(none)");
        } else {
            println!();
            self.ctx.header("Artifacts:");
            for artifact in &outcome.record.artifacts {
                let mode = if artifact.executable { "  (executable)" } else { "" };
                println!("    {}{mode}", artifact.file.style(self.ctx.styles.path));
            }
        }
        println!();
    }

    /// Render a bundle inspection.
    pub fn render_inspection(&self, inspection: &Inspection) {
        let record = &inspection.record;
        if !self.ctx.quiet {
            println!();
            self.ctx.kv("Bundle:", &inspection.bundle_dir.display().to_string());
            self.ctx.kv(
                "Service:",
                &format!("{}:{}", record.service.name, record.service.version),
            );
            self.ctx.kv("Saved:", &record.saved_at.to_rfc3339());
            let deps = if record.env.pip_dependencies.is_empty() {
                "(none)".to_string()
            } else {
                record.env.pip_dependencies.join(", ")
            };
            self.ctx.kv("Dependencies:", &deps);
            println!();
        }
        for check in &inspection.checks {
            match check.status {
                ArtifactStatus::Ok => self.ctx.success(&check.file),
                status => self.ctx.error(&format!(
                    "{}: {}",
                    check.file.style(self.ctx.styles.path),
                    status_display(status).style(self.ctx.styles.for_status(status))
                )),
            }
        }
        if !self.ctx.quiet {
            println!();
        }
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &PackConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<20} {}", "save.output_dir:", config.save.output_dir);
        println!("  {:<20} {}", "log.level:", config.log.level);
        println!("  {:<20} {}", "log.json:", config.log.json);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in [CONFIG_ENV, "MODELPACK_LOG", "MODELPACK_LOG_JSON", "NO_COLOR"] {
            println!(
                "    {:<20} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }
}

/// Short description of a failed artifact check.
#[must_use]
pub fn status_display(status: ArtifactStatus) -> &'static str {
    match status {
        ArtifactStatus::Ok => "ok",
        ArtifactStatus::Missing => "missing",
        ArtifactStatus::DigestMismatch => "content changed since save",
        ArtifactStatus::NotExecutable => "not executable",
        ArtifactStatus::Unrecognized => "not a bundle artifact",
    }
}
