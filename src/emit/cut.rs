//! Candlestick bundle of a cut report
//!
//! Rows are `[logger, v1, v2, v3, v4]` in the band order of
//! [`BandKind::labels`]; a throughput value that cannot be computed is
//! emitted as `null`.

use serde::Serialize;
use serde_json::{Value, json};

use crate::core::constants::units;
use crate::core::error::Result;
use crate::emit::charts::{ChartSize, Column};
use crate::emit::{EmitCut, human_count, round2};
use crate::pivot::{Band, BandKind, CutReport};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutChart {
    pub id: String,
    pub title: String,
    pub v_axis: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
}

impl CutChart {
    fn new(report: &CutReport, kind: BandKind) -> Self {
        let (prefix, name, unit) = match kind {
            BandKind::Throughput => ("throughput", "Throughput", units::THROUGHPUT),
            BandKind::PauseMillis => ("gc", "Total stop the world", units::PAUSE),
        };

        let mut columns = vec![Column::string("logger")];
        columns.extend(kind.labels().into_iter().map(Column::number));

        Self {
            id: format!("{prefix}_{}_{}", report.threads, report.messages),
            title: format!(
                "{name}: {} threads / {} msgs / {} series",
                report.threads,
                human_count(report.messages),
                report.trials
            ),
            v_axis: unit.to_string(),
            columns,
            rows: report.bands(kind).iter().map(band_row).collect(),
        }
    }
}

fn band_row(band: &Band) -> Vec<Value> {
    let mut row = Vec::with_capacity(5);
    row.push(json!(band.logger));
    row.extend(band.values().into_iter().map(|value| match value {
        Some(v) => json!(round2(v)),
        None => Value::Null,
    }));
    row
}

/// Everything a candlestick renderer needs for one cut.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutBundle {
    pub threads: u32,
    pub messages: u64,
    pub messages_label: String,
    pub trials: usize,
    #[serde(flatten)]
    pub size: ChartSize,
    pub throughput: CutChart,
    pub pause: CutChart,
}

impl CutBundle {
    pub fn from_report(report: &CutReport, size: ChartSize) -> Self {
        Self {
            threads: report.threads,
            messages: report.messages,
            messages_label: human_count(report.messages),
            trials: report.trials,
            size,
            throughput: CutChart::new(report, BandKind::Throughput),
            pause: CutChart::new(report, BandKind::PauseMillis),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone)]
pub struct CutBundleEmitter {
    pub size: ChartSize,
}

impl Default for CutBundleEmitter {
    fn default() -> Self {
        Self {
            size: ChartSize::cut(),
        }
    }
}

impl EmitCut for CutBundleEmitter {
    fn emit_cut(&self, report: &CutReport) -> Result<String> {
        CutBundle::from_report(report, self.size).to_json()
    }
}
