//! `actas report` command - grade the roster and write the pass/fail report
//!
//! The roster is read fully before computation, and the report file is
//! written only after classification completes, so a failed run never
//! leaves a partial report behind.

use std::fs;
use std::path::Path;
use std::time::Instant;

use actas_core::error::{ActasError, Result};
use actas_core::{grade, partition, report, roster};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::read_roster;

/// Execute the report command
pub fn execute(cli: &Cli, input: &Path, output: &Path, start: Instant) -> Result<()> {
    let raw = read_roster(input)?;
    let records = roster::parse_roster(&raw);
    tracing::debug!(elapsed = ?start.elapsed(), students = records.len(), "parse_roster");

    let enriched: Vec<_> = records.into_iter().map(grade::enrich).collect();
    let (passing, failing) = partition::partition(enriched);
    tracing::debug!(passing = passing.len(), failing = failing.len(), "partition");

    let rendered = report::render(&passing, &failing);
    fs::write(output, &rendered)
        .map_err(|e| ActasError::io_operation("write report", output.display(), e))?;

    match cli.format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "status": "ok",
                "output": output.display().to_string(),
                "passing": passing.len(),
                "failing": failing.len(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Report written to {}", output.display());
            }
        }
    }

    Ok(())
}
