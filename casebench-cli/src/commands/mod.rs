//! CLI command implementations

use crate::error::CliError;
use crate::output::{JsonFormatter, MarkdownFormatter, ReportFormatter, TextFormatter};
use anyhow::Result;
use casebench_core::plugins::{self, Operation};
use clap::Subcommand;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub mod curves;
pub mod run;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Benchmark one algorithm across the size sweep and all case categories
    Run(run::RunArgs),

    /// Print theoretical operation-count curves for one algorithm
    Curves(curves::CurvesArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List registered algorithms with their complexity labels
    Algorithms,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Algorithms => {
                for op in plugins::all() {
                    let labels: Vec<String> = casebench_core::CaseCategory::ALL
                        .iter()
                        .map(|&c| format!("{c}={}", op.complexity(c)))
                        .collect();
                    println!("{:<16} {}", op.name(), labels.join(" "));
                }
            }
            ListCommands::Formats => {
                for format in ["text", "json", "markdown"] {
                    println!("{format}");
                }
            }
        }
        Ok(())
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    Text,
    /// JSON array of rows with metadata
    Json,
    /// Markdown pipe table
    Markdown,
}

/// Resolve a registry name to its operation
pub fn resolve_operation(name: &str) -> Result<Box<dyn Operation>> {
    plugins::by_name(name).ok_or_else(|| {
        let available: Vec<&str> = plugins::all().iter().map(|op| op.name()).collect();
        anyhow::anyhow!("available algorithms: {}", available.join(", "))
            .context(CliError::UnknownAlgorithm(name.to_string()))
    })
}

/// Build the formatter for the chosen format and destination
pub fn formatter_for(
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<Box<dyn ReportFormatter>> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path)
                .map_err(|e| CliError::OutputError(format!("{}: {e}", path.display())))?,
        ),
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    })
}

/// Initialize logging based on verbosity level
pub fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_algorithms_resolve() {
        for name in [
            "bst-insert",
            "bubble-sort",
            "merge-sort",
            "selection-sort",
            "linked-search",
        ] {
            assert_eq!(resolve_operation(name).unwrap().name(), name);
        }
    }

    #[test]
    fn unknown_algorithm_reports_the_available_set() {
        let err = match resolve_operation("quick-sort") {
            Err(e) => e,
            Ok(_) => panic!("expected quick-sort to be unresolved"),
        };
        let rendered = format!("{err:#}");
        assert!(rendered.contains("available algorithms"));
        assert!(rendered.contains("merge-sort"));
    }

    #[test]
    fn list_commands_execute() {
        ListCommands::Algorithms.execute().unwrap();
        ListCommands::Formats.execute().unwrap();
    }
}
