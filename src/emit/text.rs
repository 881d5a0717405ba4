//! Summary listing of every aggregated key
//!
//! Times are reported in milliseconds with two decimals, ordered by
//! (logger, threads, messages).

use serde::Serialize;

use crate::core::error::Result;
use crate::emit::round2;
use crate::pivot::metric::pause_millis;
use crate::stats::{FinalizedAggregate, Summary};

/// Mean, σ and range of one metric, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MillisStats {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl From<Summary> for MillisStats {
    fn from(summary: Summary) -> Self {
        let millis = |seconds: f64| round2(pause_millis(seconds));
        Self {
            mean: millis(summary.mean),
            std_dev: millis(summary.std_dev),
            min: millis(summary.min),
            max: millis(summary.max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub logger: String,
    pub threads: u32,
    pub messages: u64,
    pub trials: usize,
    pub elapsed_ms: MillisStats,
    pub pause_ms: MillisStats,
}

pub fn summary_entries(aggregate: &FinalizedAggregate) -> Vec<SummaryEntry> {
    aggregate
        .iter()
        .map(|(key, stats)| SummaryEntry {
            logger: key.logger.clone(),
            threads: key.threads,
            messages: key.messages,
            trials: stats.trials(),
            elapsed_ms: stats.elapsed().summary().into(),
            pause_ms: stats.pause().summary().into(),
        })
        .collect()
}

pub fn summary_json(entries: &[SummaryEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

const HEADERS: [&str; 12] = [
    "logger",
    "threads",
    "messages",
    "trials",
    "elapsed mean",
    "elapsed σ",
    "elapsed min",
    "elapsed max",
    "pause mean",
    "pause σ",
    "pause min",
    "pause max",
];

/// Header line and rows padded to common column widths.
///
/// The logger column is left aligned, every other column right aligned.
pub fn summary_lines(entries: &[SummaryEntry]) -> (String, Vec<String>) {
    let cells: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            let mut row = vec![
                entry.logger.clone(),
                entry.threads.to_string(),
                entry.messages.to_string(),
                entry.trials.to_string(),
            ];
            for stats in [entry.elapsed_ms, entry.pause_ms] {
                for value in [stats.mean, stats.std_dev, stats.min, stats.max] {
                    row.push(format!("{value:.2}"));
                }
            }
            row
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let header = pad_row(&header_cells, &widths);
    let rows = cells.iter().map(|row| pad_row(row, &widths)).collect();
    (header, rows)
}

fn pad_row(row: &[String], widths: &[usize]) -> String {
    row.iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            if i == 0 {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
