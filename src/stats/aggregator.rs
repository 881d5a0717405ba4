//! Keyed accumulation of samples
//!
//! An [`Aggregator`] owns the raw measurements of one report-processing
//! invocation. Ingestion only appends; [`Aggregator::finalize`] consumes the
//! aggregator and hands out a read-only [`FinalizedAggregate`], so no
//! statistic can be read before every sample has been recorded.
//!
//! # Example
//!
//! ```
//! use benchreport::core::types::{MetricKey, Sample};
//! use benchreport::stats::Aggregator;
//!
//! let mut aggregator = Aggregator::new();
//! aggregator.record(Sample::new("gflogger", 1, 100, 0.5, 0.0));
//! aggregator.record(Sample::new("gflogger", 1, 100, 1.5, 0.0));
//!
//! let aggregate = aggregator.finalize().unwrap();
//! let stats = aggregate.get(&MetricKey::new("gflogger", 1, 100)).unwrap();
//! assert_eq!(stats.elapsed().mean(), 1.0);
//! ```

use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

use crate::core::error::{ReportError, Result};
use crate::core::types::{MetricKey, Sample};
use crate::stats::summary::{AggregatedStats, ValueSeries};

#[derive(Debug, Default, Clone)]
struct RawSeries {
    elapsed: Vec<f64>,
    pause: Vec<f64>,
}

/// Accumulates samples keyed by (logger, threads, messages).
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    series: FxHashMap<MetricKey, RawSeries>,
    samples: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one trial. Every sample adds exactly one elapsed value and one
    /// pause value to its key.
    pub fn record(&mut self, sample: Sample) {
        let Sample {
            logger,
            threads,
            messages,
            elapsed,
            pause,
        } = sample;
        let raw = self
            .series
            .entry(MetricKey::new(logger, threads, messages))
            .or_default();
        raw.elapsed.push(elapsed);
        raw.pause.push(pause);
        self.samples += 1;
    }

    /// Move every value of `other` into this aggregator.
    ///
    /// Used to combine per-report shards before finalizing.
    pub fn merge(&mut self, other: Aggregator) {
        for (key, raw) in other.series {
            let target = self.series.entry(key).or_default();
            target.elapsed.extend(raw.elapsed);
            target.pause.extend(raw.pause);
        }
        self.samples += other.samples;
    }

    /// Number of samples recorded so far
    pub fn len(&self) -> usize {
        self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Number of distinct keys recorded so far
    pub fn key_count(&self) -> usize {
        self.series.len()
    }

    /// Close ingestion and compute statistics for every key.
    pub fn finalize(self) -> Result<FinalizedAggregate> {
        if self.is_empty() {
            return Err(ReportError::EmptyAggregate);
        }

        let mut domain = AxisDomain::default();
        let mut stats = BTreeMap::new();
        for (key, raw) in self.series {
            domain.insert(&key);
            let aggregated =
                AggregatedStats::new(ValueSeries::new(raw.elapsed)?, ValueSeries::new(raw.pause)?);
            stats.insert(key, aggregated);
        }

        Ok(FinalizedAggregate {
            stats,
            domain,
            samples: self.samples,
        })
    }
}

impl Extend<Sample> for Aggregator {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        for sample in iter {
            self.record(sample);
        }
    }
}

impl FromIterator<Sample> for Aggregator {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut aggregator = Aggregator::new();
        aggregator.extend(iter);
        aggregator
    }
}

/// Sorted distinct values observed on each axis.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AxisDomain {
    pub threads: BTreeSet<u32>,
    pub messages: BTreeSet<u64>,
    pub loggers: BTreeSet<String>,
}

impl AxisDomain {
    fn insert(&mut self, key: &MetricKey) {
        self.threads.insert(key.threads);
        self.messages.insert(key.messages);
        if !self.loggers.contains(&key.logger) {
            self.loggers.insert(key.logger.clone());
        }
    }

    /// Number of cells in threads × messages × loggers
    pub fn cell_count(&self) -> usize {
        self.threads.len() * self.messages.len() * self.loggers.len()
    }
}

/// Read-only statistics produced by [`Aggregator::finalize`].
#[derive(Debug, Clone)]
pub struct FinalizedAggregate {
    stats: BTreeMap<MetricKey, AggregatedStats>,
    domain: AxisDomain,
    samples: usize,
}

impl FinalizedAggregate {
    /// Look up the statistics of an observed key.
    pub fn get(&self, key: &MetricKey) -> Result<&AggregatedStats> {
        self.stats
            .get(key)
            .ok_or_else(|| ReportError::MissingKey(key.clone()))
    }

    /// Look up a cell of the threads × messages × loggers product.
    pub fn cell(&self, logger: &str, threads: u32, messages: u64) -> Result<&AggregatedStats> {
        self.get(&MetricKey::new(logger, threads, messages))
    }

    pub fn domain(&self) -> &AxisDomain {
        &self.domain
    }

    /// Every key with its statistics, ordered by key
    pub fn iter(&self) -> impl Iterator<Item = (&MetricKey, &AggregatedStats)> {
        self.stats.iter()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Number of samples that were recorded
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// True when every cell of the axis product has been observed
    pub fn is_complete(&self) -> bool {
        self.stats.len() == self.domain.cell_count()
    }
}
