// Command-line interface definitions and parsing for benchreport

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    // Output & Verbosity
    /// Suppress all log output
    #[arg(short = 'q', long, global = true, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Directory for generated files (default: next to the first report)
    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        global = true,
        help_heading = "Output & Verbosity"
    )]
    pub output_dir: Option<String>,

    // Parsing
    /// Drop a trailing record that only has its header line
    #[arg(long, global = true, help_heading = "Parsing")]
    pub ignore_trailing: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", global = true, help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, global = true, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Report files shared by every reporting subcommand
#[derive(Args, Debug, Clone)]
pub struct Reports {
    /// Benchmark report files, merged into one aggregate
    #[arg(required = true, value_name = "REPORT")]
    pub reports: Vec<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the pivot table and per-thread-count line charts
    Table {
        #[command(flatten)]
        reports: Reports,

        /// Output format, repeatable (default: csv, json and html)
        #[arg(long = "format", value_name = "FORMAT", value_parser = output_formats::ALL)]
        formats: Vec<String>,

        /// Print the single selected format to stdout instead of writing files
        #[arg(long)]
        stdout: bool,
    },
    /// Summarize the trials of one (threads, messages) selection per logger
    Cut {
        #[command(flatten)]
        reports: Reports,

        /// Thread count to select
        #[arg(short = 't', long, value_name = "N")]
        threads: u32,

        /// Message count to select
        #[arg(short = 'm', long, value_name = "M")]
        messages: u64,

        /// Print the JSON bundle to stdout instead of writing files
        #[arg(long)]
        stdout: bool,
    },
    /// Print the statistics of every aggregated key
    Summary {
        #[command(flatten)]
        reports: Reports,

        /// Print JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert the parsed CLI into CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let formats = match &cli.command {
        Commands::Table { formats, .. } if !formats.is_empty() => {
            let mut unique = Vec::with_capacity(formats.len());
            for format in formats {
                if !unique.contains(format) {
                    unique.push(format.clone());
                }
            }
            Some(unique)
        }
        _ => None,
    };

    CliConfig {
        output_dir: cli.output_dir.clone(),
        formats,
        ignore_trailing: cli.ignore_trailing,
        quiet: cli.quiet,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid arguments")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_table_defaults() {
        let cli = parse(&["benchreport", "table", "report.txt"]);
        match &cli.command {
            Commands::Table {
                reports,
                formats,
                stdout,
            } => {
                assert_eq!(reports.reports, vec![PathBuf::from("report.txt")]);
                assert!(formats.is_empty());
                assert!(!stdout);
            }
            _ => panic!("Expected table command"),
        }

        let config = cli_to_config(&cli);
        assert_eq!(config.formats, None);
        assert!(!config.ignore_trailing);
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_parse_table_formats_deduplicated() {
        let cli = parse(&[
            "benchreport",
            "table",
            "a.txt",
            "b.txt",
            "--format",
            "csv",
            "--format",
            "html",
            "--format",
            "csv",
        ]);
        let config = cli_to_config(&cli);
        assert_eq!(
            config.formats,
            Some(vec!["csv".to_string(), "html".to_string()])
        );
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result = Cli::try_parse_from(["benchreport", "table", "a.txt", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_cut() {
        let cli = parse(&[
            "benchreport",
            "cut",
            "a.txt",
            "--threads",
            "4",
            "--messages",
            "1000000",
        ]);
        match cli.command {
            Commands::Cut {
                threads, messages, ..
            } => {
                assert_eq!(threads, 4);
                assert_eq!(messages, 1_000_000);
            }
            _ => panic!("Expected cut command"),
        }
    }

    #[test]
    fn test_cut_requires_selection() {
        assert!(Cli::try_parse_from(["benchreport", "cut", "a.txt", "--threads", "4"]).is_err());
    }

    #[test]
    fn test_reports_are_required() {
        assert!(Cli::try_parse_from(["benchreport", "summary"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&[
            "benchreport",
            "summary",
            "a.txt",
            "--json",
            "-v",
            "--ignore-trailing",
            "-o",
            "out",
            "--no-config",
        ]);
        let config = cli_to_config(&cli);
        assert!(config.verbose);
        assert!(config.ignore_trailing);
        assert!(config.no_config);
        assert_eq!(config.output_dir, Some("out".to_string()));
    }
}
