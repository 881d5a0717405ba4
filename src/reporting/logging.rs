use crate::config::Config;
use crate::stats::FinalizedAggregate;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity.
///
/// `RUST_LOG` overrides the level picked here unless `quiet` is set.
pub fn init_logger(verbose: bool, quiet: bool) {
    logger_builder(verbose, quiet).init();
    debug!("Logger initialized with level: {:?}", log::max_level());
}

fn logger_builder(verbose: bool, quiet: bool) -> env_logger::Builder {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);
    if !quiet {
        builder.parse_default_env();
    }
    builder
}

/// Log the effective configuration
pub fn log_config_info(config: &Config) {
    let formats = config.formats_or_default().join(",");
    let trailing = config.trailing_group_or_default();
    let line = config.line_chart_size();
    let cut = config.cut_chart_size();

    info!("Configuration: formats={formats}, trailing_group={trailing}");
    info!(
        "Charts: line={}x{}, cut={}x{}",
        line.width, line.height, cut.width, cut.height
    );
    if let Some(dir) = &config.output_dir {
        info!("Output directory: {dir}");
    }
}

/// Log the report files about to be read
pub fn log_file_info<P: AsRef<Path>>(files: &[P]) {
    info!("Processing {} report file(s)", files.len());
    for (i, file) in files.iter().enumerate() {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
}

pub fn log_samples_parsed(path: &Path, samples: usize) {
    debug!("Parsed {samples} sample(s) from {}", path.display());
}

/// A lone header line at the end of the input was dropped
pub fn log_trailing_ignored(origin: &str, line: usize) {
    warn!("Ignoring incomplete record at {origin}:{line}");
}

/// Log the shape of the finalized aggregate
pub fn log_aggregate_shape(aggregate: &FinalizedAggregate) {
    let domain = aggregate.domain();
    info!(
        "Aggregated {} sample(s) into {} key(s)",
        aggregate.samples(),
        aggregate.len()
    );
    debug!(
        "Domain: {} logger(s), {} thread count(s), {} message count(s)",
        domain.loggers.len(),
        domain.threads.len(),
        domain.messages.len()
    );
    if !aggregate.is_complete() {
        warn!(
            "Aggregate covers {} of {} cells; the pivot table needs every cell",
            aggregate.len(),
            domain.cell_count()
        );
    }
}

pub fn log_artifact_written(path: &Path, bytes: usize) {
    info!("Wrote {} ({bytes} bytes)", path.display());
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
