//! Pivot and table building
//!
//! This module cross-tabulates a finalized aggregate over its axis domains,
//! derives throughput and pause metrics per cell, and builds the per-logger
//! bands of a single (threads, messages) selection.

pub mod cut;
pub mod metric;
pub mod table;

// Re-export commonly used items
pub use cut::{Band, BandKind, CutReport};
pub use metric::Metric;
pub use table::{PivotCell, PivotRow, PivotTable, Series, SeriesRow};
