//! `actas grades` command - print final grades without writing a report

use std::path::Path;
use std::time::Instant;

use actas_core::error::Result;
use actas_core::{grade, roster};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::read_roster;

/// Execute the grades command
pub fn execute(cli: &Cli, input: &Path, start: Instant) -> Result<()> {
    let raw = read_roster(input)?;
    let records = roster::parse_roster(&raw);
    tracing::debug!(elapsed = ?start.elapsed(), students = records.len(), "parse_roster");

    let enriched: Vec<_> = records.into_iter().map(grade::enrich).collect();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&enriched)?);
        }
        OutputFormat::Human => {
            for student in &enriched {
                println!(
                    "{}, {}: {}",
                    student.record.apellidos, student.record.nombre, student.nota_final
                );
            }
        }
    }

    Ok(())
}
