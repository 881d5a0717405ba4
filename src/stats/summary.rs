use serde::Serialize;

use crate::core::error::{ReportError, Result};

/// Retained raw measurements for one metric of one key.
///
/// Values are kept sorted ascending, so every statistic is computed over the
/// same sequence no matter in which order the values were recorded. The series
/// is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSeries {
    values: Vec<f64>,
}

impl ValueSeries {
    /// Build a series from recorded values.
    ///
    /// # Examples
    /// ```
    /// use benchreport::stats::ValueSeries;
    ///
    /// let series = ValueSeries::new(vec![3.0, 1.0, 2.0]).unwrap();
    /// assert_eq!(series.values(), &[1.0, 2.0, 3.0]);
    /// assert_eq!(series.mean(), 2.0);
    /// ```
    pub fn new(mut values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ReportError::EmptyAggregate);
        }
        values.sort_by(f64::total_cmp);
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Population standard deviation (squared deviations divided by N).
    pub fn std_dev(&self) -> f64 {
        let mean = self.mean();
        let variance = self
            .values
            .iter()
            .map(|&v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / self.values.len() as f64;
        variance.sqrt()
    }

    pub fn min(&self) -> f64 {
        self.values[0]
    }

    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    pub fn summary(&self) -> Summary {
        Summary {
            count: self.count(),
            mean: self.mean(),
            std_dev: self.std_dev(),
            min: self.min(),
            max: self.max(),
        }
    }
}

/// Derived statistics of a value series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// `mean - σ`
    pub fn lower_sigma(&self) -> f64 {
        self.mean - self.std_dev
    }

    /// `mean + σ`
    pub fn upper_sigma(&self) -> f64 {
        self.mean + self.std_dev
    }
}

/// Everything recorded for one metric key.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedStats {
    elapsed: ValueSeries,
    pause: ValueSeries,
}

impl AggregatedStats {
    pub fn new(elapsed: ValueSeries, pause: ValueSeries) -> Self {
        Self { elapsed, pause }
    }

    /// Elapsed times in seconds
    pub fn elapsed(&self) -> &ValueSeries {
        &self.elapsed
    }

    /// Pause times in seconds
    pub fn pause(&self) -> &ValueSeries {
        &self.pause
    }

    /// Number of trials recorded for the key
    pub fn trials(&self) -> usize {
        self.elapsed.count()
    }
}
