//! Command dispatch logic for actas

use std::path::{Path, PathBuf};
use std::time::Instant;

use actas_core::config::RunConfig;
use actas_core::error::{ActasError, Result};

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    if cli.verbose {
        eprintln!("load_config: {:?}", start.elapsed());
    }

    match &cli.command {
        Commands::Report { input, output } => {
            let input = resolve_input(input.as_deref(), &config)?;
            let output = resolve_output(output.as_deref(), &config, &input);
            commands::report::execute(cli, &input, &output, start)
        }

        Commands::Grades { input } => {
            let input = resolve_input(input.as_deref(), &config)?;
            commands::grades::execute(cli, &input, start)
        }
    }
}

/// The CLI argument wins over the config file; having neither is a usage error.
fn resolve_input(arg: Option<&Path>, config: &RunConfig) -> Result<PathBuf> {
    arg.map(Path::to_path_buf)
        .or_else(|| config.input.clone())
        .ok_or(ActasError::MissingInput)
}

/// The default output sits beside the input roster.
fn resolve_output(arg: Option<&Path>, config: &RunConfig, input: &Path) -> PathBuf {
    arg.map(Path::to_path_buf)
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| input.with_file_name("NotasFinales.txt"))
}
