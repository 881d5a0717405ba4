//! Statistics aggregation
//!
//! This module groups repeated trials by metric key and derives
//! mean, standard deviation, min and max from the retained values.

pub mod aggregator;
pub mod summary;

// Re-export commonly used items
pub use aggregator::{Aggregator, AxisDomain, FinalizedAggregate};
pub use summary::{AggregatedStats, Summary, ValueSeries};
