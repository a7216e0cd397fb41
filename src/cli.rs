//! CLI argument parsing for actas
//!
//! Uses clap derive with global flags: --config, --format, --quiet,
//! --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for actas commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

/// Actas - weighted grade report CLI
#[derive(Parser, Debug)]
#[command(name = "actas")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Optional TOML config file naming the input/output paths
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Grade the roster and write the two-section pass/fail report
    Report {
        /// Roster input path (falls back to the config file)
        input: Option<PathBuf>,

        /// Report output path (default: NotasFinales.txt beside the input)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print each student's final grade without writing a report
    Grades {
        /// Roster input path (falls back to the config file)
        input: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        // Should not panic
        let result = Cli::try_parse_from(["actas", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_report() {
        let cli = Cli::try_parse_from(["actas", "report", "notas.csv"]).unwrap();
        if let Commands::Report { input, output } = cli.command {
            assert_eq!(input, Some(PathBuf::from("notas.csv")));
            assert_eq!(output, None);
        } else {
            panic!("Expected Report command");
        }
    }

    #[test]
    fn test_parse_report_with_output() {
        let cli =
            Cli::try_parse_from(["actas", "report", "notas.csv", "--output", "informe.txt"])
                .unwrap();
        if let Commands::Report { output, .. } = cli.command {
            assert_eq!(output, Some(PathBuf::from("informe.txt")));
        } else {
            panic!("Expected Report command");
        }
    }

    #[test]
    fn test_parse_grades_without_input() {
        let cli = Cli::try_parse_from(["actas", "grades"]).unwrap();
        assert!(matches!(cli.command, Commands::Grades { input: None }));
    }

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["actas", "--format", "json", "grades"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["actas"]).is_err());
    }
}
