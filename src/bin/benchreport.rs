use benchreport::config::{CliConfig, Config};
use benchreport::core::constants::{files, output_formats};
use benchreport::core::error::{ReportError, Result};
use benchreport::emit::{
    ChartBundleEmitter, CsvEmitter, CutBundleEmitter, EmitCut, EmitTable, HostDocument,
    summary_entries, summary_json,
};
use benchreport::parsing::{RecordParser, ingest_paths};
use benchreport::pivot::{CutReport, PivotTable};
use benchreport::reporting::logging;
use benchreport::stats::FinalizedAggregate;
use benchreport::ui::completion::print_completions;
use benchreport::ui::output;
use benchreport::ui::{Cli, Commands, cli_to_config};
use clap::{CommandFactory, Parser};

use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    if let Err(e) = run_benchreport_logic(&cli) {
        logging::log_error("Report generation failed", Some(&e));
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Commands::CompletionGenerate { shell } => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        _ => None,
    }
}

/// Main report logic extracted from main() for testing
pub fn run_benchreport_logic(cli: &Cli) -> Result<()> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    let generated_at = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string();

    match &cli.command {
        Commands::Table {
            reports, stdout, ..
        } => {
            let aggregate = aggregate_reports(&reports.reports, &config)?;
            let artifacts = table_artifacts(&aggregate, &config, &reports.reports, &generated_at)?;
            if *stdout {
                print_single_artifact(artifacts)
            } else {
                write_artifacts(&artifacts, cli_config.quiet)
            }
        }
        Commands::Cut {
            reports,
            threads,
            messages,
            stdout,
        } => {
            let aggregate = aggregate_reports(&reports.reports, &config)?;
            let report = CutReport::build(&aggregate, *threads, *messages)?;
            if *stdout {
                let json = CutBundleEmitter {
                    size: config.cut_chart_size(),
                }
                .emit_cut(&report)?;
                println!("{json}");
                Ok(())
            } else {
                let artifacts = cut_artifacts(&report, &config, &reports.reports, &generated_at)?;
                write_artifacts(&artifacts, cli_config.quiet)
            }
        }
        Commands::Summary { reports, json } => {
            let aggregate = aggregate_reports(&reports.reports, &config)?;
            let entries = summary_entries(&aggregate);
            if *json {
                println!("{}", summary_json(&entries)?);
            } else {
                output::display_summary(&entries);
            }
            Ok(())
        }
        Commands::CompletionGenerate { .. } => Ok(()),
    }
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Parse every report, merge the shards and finalize once
pub fn aggregate_reports(reports: &[PathBuf], config: &Config) -> Result<FinalizedAggregate> {
    logging::log_file_info(reports);

    let parser = RecordParser::new(config.trailing_policy()?);
    let aggregate = ingest_paths(&parser, reports)?.finalize()?;

    logging::log_aggregate_shape(&aggregate);
    Ok(aggregate)
}

/// A rendered output and where it belongs
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// Render every configured table-mode format
pub fn table_artifacts(
    aggregate: &FinalizedAggregate,
    config: &Config,
    reports: &[PathBuf],
    generated_at: &str,
) -> Result<Vec<Artifact>> {
    let table = PivotTable::build(aggregate)?;
    let base = output::artifact_base(reports, config.output_dir.as_deref())?;
    let line_size = config.line_chart_size();

    config
        .formats_or_default()
        .iter()
        .map(|format| {
            let (content, extension) = match format.as_str() {
                output_formats::CSV => (CsvEmitter::default().emit_table(&table)?, files::CSV_EXTENSION),
                output_formats::JSON => (
                    ChartBundleEmitter { size: line_size }.emit_table(&table)?,
                    files::JSON_EXTENSION,
                ),
                output_formats::HTML => (
                    host_document(reports, config, generated_at).emit_table(&table)?,
                    files::HTML_EXTENSION,
                ),
                other => {
                    return Err(ReportError::InvalidArgument(format!(
                        "Unsupported output format '{other}'"
                    )));
                }
            };
            Ok(Artifact {
                path: output::artifact_path(&base, "", extension),
                content,
            })
        })
        .collect()
}

/// Render the cut bundle and its host page
pub fn cut_artifacts(
    report: &CutReport,
    config: &Config,
    reports: &[PathBuf],
    generated_at: &str,
) -> Result<Vec<Artifact>> {
    let base = output::artifact_base(reports, config.output_dir.as_deref())?;
    let suffix = format!("_{}_{}", report.threads, report.messages);

    let json = CutBundleEmitter {
        size: config.cut_chart_size(),
    }
    .emit_cut(report)?;
    let html = host_document(reports, config, generated_at).emit_cut(report)?;

    Ok(vec![
        Artifact {
            path: output::artifact_path(&base, &suffix, files::JSON_EXTENSION),
            content: json,
        },
        Artifact {
            path: output::artifact_path(&base, &suffix, files::HTML_EXTENSION),
            content: html,
        },
    ])
}

fn host_document(reports: &[PathBuf], config: &Config, generated_at: &str) -> HostDocument {
    let title = reports
        .first()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "benchreport".to_string());

    HostDocument::new(title, generated_at)
        .with_sizes(config.line_chart_size(), config.cut_chart_size())
}

fn print_single_artifact(artifacts: Vec<Artifact>) -> Result<()> {
    match <[Artifact; 1]>::try_from(artifacts) {
        Ok([artifact]) => {
            print!("{}", artifact.content);
            Ok(())
        }
        Err(_) => Err(ReportError::InvalidArgument(
            "--stdout needs exactly one --format".to_string(),
        )),
    }
}

fn write_artifacts(artifacts: &[Artifact], quiet: bool) -> Result<()> {
    for artifact in artifacts {
        output::write_artifact(&artifact.path, &artifact.content)?;
    }
    if !quiet {
        let paths: Vec<PathBuf> = artifacts.iter().map(|a| a.path.clone()).collect();
        output::display_written(&paths);
    }
    Ok(())
}
