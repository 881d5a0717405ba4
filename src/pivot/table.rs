use crate::core::error::Result;
use crate::pivot::metric::Metric;
use crate::stats::FinalizedAggregate;

/// Derived metrics of one logger in one (threads, messages) row.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotCell {
    pub logger: String,
    /// Messages per second
    pub throughput: f64,
    pub pause_millis: f64,
}

impl PivotCell {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Throughput => self.throughput,
            Metric::PauseMillis => self.pause_millis,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PivotRow {
    pub threads: u32,
    pub messages: u64,
    /// One cell per logger, in logger order
    pub cells: Vec<PivotCell>,
}

/// Dense cross-tabulation of the axis domains.
///
/// Rows cover every (threads, messages) pair in ascending order, and every
/// row holds a cell for every logger. Building fails on the first cell that
/// was never observed, so a table is either complete or not produced at all.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    loggers: Vec<String>,
    rows: Vec<PivotRow>,
}

impl PivotTable {
    pub fn build(aggregate: &FinalizedAggregate) -> Result<Self> {
        let domain = aggregate.domain();
        let loggers: Vec<String> = domain.loggers.iter().cloned().collect();
        let mut rows = Vec::with_capacity(domain.threads.len() * domain.messages.len());

        for &threads in &domain.threads {
            for &messages in &domain.messages {
                let cells = loggers
                    .iter()
                    .map(|logger| -> Result<PivotCell> {
                        let stats = aggregate.cell(logger, threads, messages)?;
                        Ok(PivotCell {
                            logger: logger.clone(),
                            throughput: Metric::Throughput.of(messages, stats),
                            pause_millis: Metric::PauseMillis.of(messages, stats),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                rows.push(PivotRow {
                    threads,
                    messages,
                    cells,
                });
            }
        }

        Ok(Self { loggers, rows })
    }

    /// Logger names in lexicographic order
    pub fn loggers(&self) -> &[String] {
        &self.loggers
    }

    pub fn rows(&self) -> &[PivotRow] {
        &self.rows
    }

    /// Distinct thread counts in ascending order
    pub fn thread_counts(&self) -> Vec<u32> {
        let mut threads: Vec<u32> = self.rows.iter().map(|row| row.threads).collect();
        threads.dedup();
        threads
    }

    /// Rows of one thread count with one value per logger, extracted by `value`.
    pub fn project_with<F>(&self, threads: u32, value: F) -> Vec<SeriesRow>
    where
        F: Fn(&PivotCell) -> f64,
    {
        self.rows
            .iter()
            .filter(|row| row.threads == threads)
            .map(|row| SeriesRow {
                messages: row.messages,
                values: row.cells.iter().map(&value).collect(),
            })
            .collect()
    }

    /// Chart-ready series of `metric` for one thread count.
    pub fn project(&self, threads: u32, metric: Metric) -> Series {
        Series {
            threads,
            metric,
            loggers: self.loggers.clone(),
            rows: self.project_with(threads, |cell| cell.value(metric)),
        }
    }
}

/// Values of one metric for one thread count, ordered by message count.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub threads: u32,
    pub metric: Metric,
    /// Column names of the values, in order
    pub loggers: Vec<String>,
    pub rows: Vec<SeriesRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    pub messages: u64,
    pub values: Vec<f64>,
}
