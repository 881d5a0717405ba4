//! Output rendering
//!
//! This module formats pivoted data into the CSV table, the chart and
//! cut bundles, the host HTML document and the terminal summary. Every
//! emitter is a pure function of its input: rendering the same table twice
//! yields the same bytes.

pub mod charts;
pub mod csv;
pub mod cut;
pub mod html;
pub mod text;

use crate::core::error::Result;
use crate::pivot::{CutReport, PivotTable};

// Re-export commonly used items
pub use self::csv::CsvEmitter;
pub use charts::{ChartBundle, ChartBundleEmitter, ChartSize};
pub use cut::{CutBundle, CutBundleEmitter};
pub use html::HostDocument;
pub use text::{SummaryEntry, summary_entries, summary_json, summary_lines};

/// Renders a dense pivot table.
pub trait EmitTable {
    fn emit_table(&self, table: &PivotTable) -> Result<String>;
}

/// Renders a cut report.
pub trait EmitCut {
    fn emit_cut(&self, report: &CutReport) -> Result<String>;
}

/// Round to the two decimals used by every output.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Human readable count with 1024-based suffixes, truncating: `1048576` is `1M`.
pub fn human_count(count: u64) -> String {
    const SUFFIXES: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];

    let mut value = count;
    for suffix in SUFFIXES {
        if value < 1024 {
            return format!("{value}{suffix}");
        }
        value /= 1024;
    }
    // u64::MAX is below 16E, so the loop always returns
    format!("{value}E")
}
