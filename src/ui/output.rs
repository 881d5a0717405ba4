//! Artifact paths, file writing and terminal display

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{ReportError, Result};
use crate::emit::{SummaryEntry, summary_lines};
use crate::reporting::logging;
use crate::ui::color::{Colors, colorize};

/// Base path that artifact names are derived from.
///
/// The file name is the first report's file name; the directory is
/// `output_dir` when given, else the first report's own directory.
pub fn artifact_base(reports: &[PathBuf], output_dir: Option<&str>) -> Result<PathBuf> {
    let first = reports
        .first()
        .ok_or_else(|| ReportError::InvalidArgument("No report files provided".to_string()))?;
    let name = first.file_name().ok_or_else(|| {
        ReportError::InvalidArgument(format!(
            "Report path '{}' has no file name",
            first.display()
        ))
    })?;

    let dir = match output_dir {
        Some(dir) => PathBuf::from(dir),
        None => first.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    Ok(dir.join(name))
}

/// `<base><suffix>.<extension>`, e.g. `run.txt_4_1000.json`
pub fn artifact_path(base: &Path, suffix: &str, extension: &str) -> PathBuf {
    let mut name: OsString = base.as_os_str().to_owned();
    name.push(suffix);
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Write one artifact, creating its directory when needed
pub fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    logging::log_artifact_written(path, content.len());
    Ok(())
}

pub fn display_written(paths: &[PathBuf]) {
    for path in paths {
        println!(
            "{} {}",
            colorize("wrote", Colors::GREEN),
            path.display()
        );
    }
}

pub fn display_summary(entries: &[SummaryEntry]) {
    if entries.is_empty() {
        return;
    }

    let (header, rows) = summary_lines(entries);
    println!("{}", colorize(&header, Colors::BOLD));
    for row in rows {
        println!("{row}");
    }
    println!(
        "{}",
        colorize(
            &format!("{} key(s), times in ms", entries.len()),
            Colors::DIM
        )
    );
}
