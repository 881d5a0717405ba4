use serde::Serialize;
use std::fmt;

/// One trial record parsed from a benchmark report.
///
/// Samples are produced by the record parser and consumed exactly once by the
/// aggregator. Times are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Name of the logger implementation under test
    pub logger: String,
    /// Number of producer threads used by the trial
    pub threads: u32,
    /// Number of messages logged by the trial
    pub messages: u64,
    /// Wall-clock time of the trial in seconds
    pub elapsed: f64,
    /// Total stop-the-world pause in seconds (0.0 when not reported)
    pub pause: f64,
}

impl Sample {
    /// Create a new sample.
    ///
    /// # Examples
    /// ```
    /// use benchreport::core::types::Sample;
    ///
    /// let sample = Sample::new("gflogger", 4, 100, 0.5, 0.0);
    /// assert_eq!(sample.key().threads, 4);
    /// ```
    pub fn new<S: Into<String>>(
        logger: S,
        threads: u32,
        messages: u64,
        elapsed: f64,
        pause: f64,
    ) -> Self {
        Self {
            logger: logger.into(),
            threads,
            messages,
            elapsed,
            pause,
        }
    }

    /// The configuration this trial belongs to.
    pub fn key(&self) -> MetricKey {
        MetricKey::new(self.logger.clone(), self.threads, self.messages)
    }
}

/// Identifies the configuration that groups repeated trials.
///
/// Equality, hashing and ordering are structural over the three fields, so a
/// logger name may contain any character without colliding with another key.
/// Keys order by logger name, then thread count, then message count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MetricKey {
    pub logger: String,
    pub threads: u32,
    pub messages: u64,
}

impl MetricKey {
    pub fn new<S: Into<String>>(logger: S, threads: u32, messages: u64) -> Self {
        Self {
            logger: logger.into(),
            threads,
            messages,
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "logger={} threads={} messages={}",
            self.logger, self.threads, self.messages
        )
    }
}
