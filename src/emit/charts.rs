//! Per-thread-count chart bundle
//!
//! For each distinct thread count the bundle carries two line charts,
//! throughput and pause, whose rows are `[messages, value per logger...]`
//! ordered by ascending message count. Column metadata names every logger.

use serde::Serialize;
use serde_json::{Value, json};

use crate::core::constants::{charts, units};
use crate::core::error::Result;
use crate::emit::{EmitTable, round2};
use crate::pivot::{Metric, PivotTable, Series};

/// Pixel size of a rendered chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl ChartSize {
    pub fn line() -> Self {
        Self {
            width: charts::LINE_WIDTH,
            height: charts::LINE_HEIGHT,
        }
    }

    pub fn cut() -> Self {
        Self {
            width: charts::CUT_WIDTH,
            height: charts::CUT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// `string` or `number`
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub label: String,
}

impl Column {
    pub fn number<S: Into<String>>(label: S) -> Self {
        Self {
            kind: "number",
            label: label.into(),
        }
    }

    pub fn string<S: Into<String>>(label: S) -> Self {
        Self {
            kind: "string",
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    pub log_scale: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    /// Element id the chart is drawn into
    pub id: String,
    pub title: String,
    pub h_axis: Axis,
    pub v_axis: Axis,
    #[serde(flatten)]
    pub size: ChartSize,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
}

impl LineChart {
    fn from_series(series: &Series, size: ChartSize) -> Self {
        let mut columns = Vec::with_capacity(series.loggers.len() + 1);
        columns.push(Column::number("Messages"));
        columns.extend(series.loggers.iter().map(Column::number));

        let rows = series
            .rows
            .iter()
            .map(|row| {
                let mut values = Vec::with_capacity(row.values.len() + 1);
                values.push(json!(row.messages));
                values.extend(row.values.iter().map(|&v| json!(round2(v))));
                values
            })
            .collect();

        Self {
            id: format!("{}_{}_chart", series.metric.key(), series.threads),
            title: format!("{}, {}", series.metric.title(), thread_label(series.threads)),
            h_axis: Axis {
                title: units::MESSAGES.to_string(),
                log_scale: true,
            },
            v_axis: Axis {
                title: series.metric.unit().to_string(),
                log_scale: false,
            },
            size,
            columns,
            rows,
        }
    }
}

/// Charts of one thread count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadCharts {
    pub threads: u32,
    pub throughput: LineChart,
    pub pause: LineChart,
}

/// Everything a line-chart renderer needs for table mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBundle {
    pub throughput_unit: &'static str,
    pub pause_unit: &'static str,
    pub loggers: Vec<String>,
    pub charts: Vec<ThreadCharts>,
}

impl ChartBundle {
    pub fn from_table(table: &PivotTable, size: ChartSize) -> Self {
        let charts = table
            .thread_counts()
            .into_iter()
            .map(|threads| ThreadCharts {
                threads,
                throughput: LineChart::from_series(&table.project(threads, Metric::Throughput), size),
                pause: LineChart::from_series(&table.project(threads, Metric::PauseMillis), size),
            })
            .collect();

        Self {
            throughput_unit: units::THROUGHPUT,
            pause_unit: units::PAUSE,
            loggers: table.loggers().to_vec(),
            charts,
        }
    }

    /// Element ids of every chart, in drawing order
    pub fn chart_ids(&self) -> Vec<&str> {
        self.charts
            .iter()
            .flat_map(|c| [c.throughput.id.as_str(), c.pause.id.as_str()])
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Emits the chart bundle as JSON.
#[derive(Debug, Clone)]
pub struct ChartBundleEmitter {
    pub size: ChartSize,
}

impl Default for ChartBundleEmitter {
    fn default() -> Self {
        Self {
            size: ChartSize::line(),
        }
    }
}

impl EmitTable for ChartBundleEmitter {
    fn emit_table(&self, table: &PivotTable) -> Result<String> {
        ChartBundle::from_table(table, self.size).to_json()
    }
}

/// `single thread` for one thread, `<n> threads` otherwise
pub fn thread_label(threads: u32) -> String {
    if threads == 1 {
        "single thread".to_string()
    } else {
        format!("{threads} threads")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Sample;
    use crate::stats::Aggregator;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn table() -> PivotTable {
        let mut aggregator = Aggregator::new();
        for logger in ["B", "A"] {
            for threads in [1, 4] {
                for messages in [100, 10] {
                    aggregator.record(Sample::new(logger, threads, messages, 0.5, 0.002));
                }
            }
        }
        PivotTable::build(&aggregator.finalize().expect("samples")).expect("complete grid")
    }

    #[test]
    fn test_bundle_has_two_charts_per_thread_count() {
        let bundle = ChartBundle::from_table(&table(), ChartSize::line());

        assert_eq!(bundle.charts.len(), 2);
        assert_eq!(bundle.charts[0].threads, 1);
        assert_eq!(bundle.charts[1].threads, 4);
        assert_eq!(
            bundle.chart_ids(),
            vec![
                "throughput_1_chart",
                "gc_1_chart",
                "throughput_4_chart",
                "gc_4_chart"
            ]
        );
    }

    #[test]
    fn test_chart_rows_and_columns() {
        let bundle = ChartBundle::from_table(&table(), ChartSize::line());
        let chart = &bundle.charts[1].throughput;

        let labels: Vec<&str> = chart.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Messages", "A", "B"]);
        assert_eq!(chart.rows.len(), 2);
        assert_eq!(chart.rows[0], vec![json!(10), json!(20.0), json!(20.0)]);
        assert_eq!(chart.rows[1], vec![json!(100), json!(200.0), json!(200.0)]);

        let pause = &bundle.charts[1].pause;
        assert_eq!(pause.rows[0], vec![json!(10), json!(2.0), json!(2.0)]);
    }

    #[test]
    fn test_chart_titles_and_axes() {
        let bundle = ChartBundle::from_table(&table(), ChartSize::line());

        assert_eq!(bundle.charts[0].throughput.title, "Throughput, single thread");
        assert_eq!(bundle.charts[1].pause.title, "Total stop the world, 4 threads");
        assert_eq!(bundle.charts[0].throughput.v_axis.title, "messages / s");
        assert_eq!(bundle.charts[0].pause.v_axis.title, "ms");
        assert!(bundle.charts[0].pause.h_axis.log_scale);
    }

    #[test]
    fn test_bundle_json_is_deterministic() -> TestResult {
        let table = table();
        let emitter = ChartBundleEmitter::default();

        let first = emitter.emit_table(&table)?;
        let second = emitter.emit_table(&table)?;
        assert_eq!(first.as_bytes(), second.as_bytes());

        let value: Value = serde_json::from_str(&first)?;
        assert_eq!(value["charts"][0]["throughput"]["width"], json!(600));
        assert_eq!(value["charts"][0]["throughput"]["columns"][0]["type"], json!("number"));
        Ok(())
    }
}
