//! modelpack - declare a model service environment and save it as a deployable bundle

use std::process::ExitCode;

use clap::Parser;

use modelpack_cli::application::ports::ConfigStore;
use modelpack_cli::cli::Cli;
use modelpack_cli::infra::config::YamlConfigStore;
use modelpack_cli::observability::init_tracing;
use modelpack_cli::output::json::{error_code, format_error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    // A broken config file is reported by the command itself.
    let log_config = YamlConfigStore.load().map(|c| c.log).unwrap_or_default();
    init_tracing(&log_config);

    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if json {
                match format_error(&format!("{e:#}"), error_code(&e)) {
                    Ok(out) => println!("{out}"),
                    Err(_) => eprintln!("Error: {e:#}"),
                }
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
