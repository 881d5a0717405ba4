//! Single-selection ("cut") reports
//!
//! A cut fixes one (threads, messages) pair and summarizes, per logger, the
//! spread of the raw trial values as a five-number band: the logger name and
//! four values laid out low to high like a candlestick. On skewed trials σ can
//! exceed the distance from the mean to an extreme, so the inner values are
//! not clamped between the outer ones.
//!
//! Pause bands come straight from the pause times: `min, mean − σ, mean + σ,
//! max`, in milliseconds. Throughput bands are derived from the elapsed-time
//! statistics through `messages / time`, which reverses their order: the
//! slowest trial (max time) gives the lowest throughput. The throughput band
//! is therefore `messages / max, messages / (mean + σ), messages / (mean − σ),
//! messages / min`, and [`BandKind::labels`] names the time statistic behind
//! each position.

use crate::core::error::Result;
use crate::pivot::metric::{pause_millis, throughput};
use crate::stats::{FinalizedAggregate, Summary};

/// Which metric a band describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandKind {
    Throughput,
    PauseMillis,
}

impl BandKind {
    /// Labels of the four values, low to high.
    pub fn labels(&self) -> [&'static str; 4] {
        match self {
            BandKind::Throughput => [
                "messages/max_time",
                "messages/(mean+sigma)",
                "messages/(mean-sigma)",
                "messages/min_time",
            ],
            BandKind::PauseMillis => ["min", "mean-sigma", "mean+sigma", "max"],
        }
    }
}

/// Five-number band of one logger.
///
/// A throughput value is `None` when the time statistic behind it is not
/// positive (`mean − σ` can drop to zero or below on skewed trials) or so
/// close to zero that the quotient overflows.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub logger: String,
    pub low: Option<f64>,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub high: Option<f64>,
}

impl Band {
    fn throughput(logger: &str, messages: u64, time: &Summary) -> Self {
        let inverse = |seconds: f64| {
            Some(throughput(messages, seconds)).filter(|value| seconds > 0.0 && value.is_finite())
        };
        Self {
            logger: logger.to_string(),
            low: inverse(time.max),
            lower: inverse(time.upper_sigma()),
            upper: inverse(time.lower_sigma()),
            high: inverse(time.min),
        }
    }

    fn pause(logger: &str, pause: &Summary) -> Self {
        Self {
            logger: logger.to_string(),
            low: Some(pause_millis(pause.min)),
            lower: Some(pause_millis(pause.lower_sigma())),
            upper: Some(pause_millis(pause.upper_sigma())),
            high: Some(pause_millis(pause.max)),
        }
    }

    pub fn values(&self) -> [Option<f64>; 4] {
        [self.low, self.lower, self.upper, self.high]
    }
}

/// Per-logger bands for one fixed (threads, messages) selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CutReport {
    pub threads: u32,
    pub messages: u64,
    /// Largest number of trials behind any logger's band
    pub trials: usize,
    pub throughput: Vec<Band>,
    pub pause: Vec<Band>,
}

impl CutReport {
    /// Build the bands of every observed logger for the selection.
    ///
    /// Fails with a missing key error if any logger has no trials for it.
    pub fn build(aggregate: &FinalizedAggregate, threads: u32, messages: u64) -> Result<Self> {
        let loggers = &aggregate.domain().loggers;
        let mut report = CutReport {
            threads,
            messages,
            trials: 0,
            throughput: Vec::with_capacity(loggers.len()),
            pause: Vec::with_capacity(loggers.len()),
        };

        for logger in loggers {
            let stats = aggregate.cell(logger, threads, messages)?;
            report.trials = report.trials.max(stats.trials());
            report.throughput.push(Band::throughput(
                logger,
                messages,
                &stats.elapsed().summary(),
            ));
            report
                .pause
                .push(Band::pause(logger, &stats.pause().summary()));
        }

        Ok(report)
    }

    pub fn bands(&self, kind: BandKind) -> &[Band] {
        match kind {
            BandKind::Throughput => &self.throughput,
            BandKind::PauseMillis => &self.pause,
        }
    }
}
