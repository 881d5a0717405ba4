//! Flat CSV table
//!
//! Header `threads,messages,<logger> throughput,<logger> gc,...` followed by
//! one row per (threads, messages) pair. Throughput is in messages per second,
//! pause in milliseconds, both with two decimals.

use std::io::{self, Write};

use crate::core::constants::units;
use crate::core::error::{ReportError, Result};
use crate::emit::EmitTable;
use crate::pivot::{Metric, PivotTable};

#[derive(Debug, Clone)]
pub struct CsvEmitter {
    delimiter: u8,
}

impl Default for CsvEmitter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvEmitter {
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Header row of the table.
    pub fn header(table: &PivotTable) -> Vec<String> {
        let mut header = Vec::with_capacity(2 + table.loggers().len() * Metric::ALL.len());
        header.push("threads".to_string());
        header.push("messages".to_string());
        for logger in table.loggers() {
            for metric in Metric::ALL {
                header.push(format!("{logger} {}", metric.key()));
            }
        }
        header
    }

    /// Write the table to any writer.
    pub fn write<W: Write>(&self, table: &PivotTable, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        csv_writer.write_record(Self::header(table))?;
        for row in table.rows() {
            let mut record = Vec::with_capacity(2 + row.cells.len() * Metric::ALL.len());
            record.push(row.threads.to_string());
            record.push(row.messages.to_string());
            for cell in &row.cells {
                for metric in Metric::ALL {
                    record.push(format!("{:.*}", units::DECIMALS, cell.value(metric)));
                }
            }
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl EmitTable for CsvEmitter {
    fn emit_table(&self, table: &PivotTable) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(table, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| ReportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}
