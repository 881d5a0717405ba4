//! Report parsing
//!
//! This module turns raw benchmark report text into typed samples
//! and feeds whole report files into an aggregator.

pub mod ingest;
pub mod parser;

// Re-export commonly used items
pub use ingest::ingest_paths;
pub use parser::{RecordParser, SampleParser, TrailingGroup};
