//! Aggregate repeated logger benchmark trials into pivot tables, chart
//! bundles and per-selection candlestick reports.
//!
//! A report is a plain-text file of three-line records (header, timing,
//! pause). Records are parsed into [`Sample`]s, accumulated per
//! [`MetricKey`] by an [`Aggregator`], finalized into statistics and then
//! pivoted and emitted as CSV, JSON chart data or an HTML host page.

pub mod config;
pub mod core;
pub mod emit;
pub mod parsing;
pub mod pivot;
pub mod reporting;
pub mod stats;
pub mod ui;

// Re-export commonly used items
pub use crate::config::{CliConfig, Config};
pub use crate::core::{MetricKey, ReportError, Result, Sample};
pub use crate::parsing::{RecordParser, SampleParser, TrailingGroup, ingest_paths};
pub use crate::pivot::{CutReport, Metric, PivotTable};
pub use crate::stats::{Aggregator, FinalizedAggregate};
