use crate::core::constants::{charts, units};
use crate::stats::AggregatedStats;

/// A metric derived from the aggregated statistics of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Messages per second, from the mean elapsed time
    Throughput,
    /// Mean stop-the-world pause in milliseconds
    PauseMillis,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Throughput, Metric::PauseMillis];

    /// Value of this metric for a key with `messages` messages.
    pub fn of(&self, messages: u64, stats: &AggregatedStats) -> f64 {
        match self {
            Metric::Throughput => throughput(messages, stats.elapsed().mean()),
            Metric::PauseMillis => pause_millis(stats.pause().mean()),
        }
    }

    /// Suffix of the CSV column and prefix of chart element ids
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Throughput => charts::THROUGHPUT_SUFFIX,
            Metric::PauseMillis => charts::PAUSE_SUFFIX,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Throughput => "Throughput",
            Metric::PauseMillis => "Total stop the world",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Throughput => units::THROUGHPUT,
            Metric::PauseMillis => units::PAUSE,
        }
    }
}

/// Messages per second
pub fn throughput(messages: u64, seconds: f64) -> f64 {
    messages as f64 / seconds
}

pub fn pause_millis(seconds: f64) -> f64 {
    units::MILLIS_PER_SECOND * seconds
}
