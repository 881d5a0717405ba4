use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::core::constants::{record, trailing};
use crate::core::error::{ReportError, Result};
use crate::core::types::Sample;
use crate::pivot::metric::throughput;
use crate::reporting::logging;

/// What to do with a trailing record that has only its header line.
///
/// A trailing record with header and timing lines but no pause line is always
/// accepted: it is what a report ending on an empty pause line looks like once
/// the final newline is gone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingGroup {
    /// Fail with a malformed record error
    #[default]
    Error,
    /// Drop the partial record and log a warning
    Ignore,
}

impl FromStr for TrailingGroup {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            trailing::ERROR => Ok(TrailingGroup::Error),
            trailing::IGNORE => Ok(TrailingGroup::Ignore),
            other => Err(ReportError::Config(format!(
                "Invalid trailing group policy '{other}'. Expected one of: {}.",
                trailing::ALL.join(", ")
            ))),
        }
    }
}

pub trait SampleParser {
    /// Parse report text. `origin` names the input in error messages.
    fn parse_str(&self, origin: &str, input: &str) -> Result<Vec<Sample>>;

    /// Read and parse a report file.
    fn parse_path(&self, path: &Path) -> Result<Vec<Sample>> {
        if !path.exists() {
            return Err(ReportError::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let samples = self.parse_str(&path.display().to_string(), &content)?;
        logging::log_samples_parsed(path, samples.len());
        Ok(samples)
    }
}

/// Parser for the fixed three-line report record.
///
/// ```text
/// <logger> x x x <threads> x <messages> ...
/// x x x <elapsed seconds> ...
/// <pause seconds, or empty>
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordParser {
    trailing: TrailingGroup,
}

impl SampleParser for RecordParser {
    fn parse_str(&self, origin: &str, input: &str) -> Result<Vec<Sample>> {
        let lines: Vec<&str> = input.lines().collect();
        let mut samples = Vec::with_capacity(lines.len() / record::LINES_PER_RECORD + 1);

        for (index, group) in lines.chunks(record::LINES_PER_RECORD).enumerate() {
            let first_line = index * record::LINES_PER_RECORD + 1;
            match group {
                [header, timing, pause] => {
                    samples.push(Self::parse_record(
                        origin,
                        first_line,
                        header,
                        timing,
                        Some(*pause),
                    )?);
                }
                [header, timing] => {
                    samples.push(Self::parse_record(
                        origin, first_line, header, timing, None,
                    )?);
                }
                [header] => match self.trailing {
                    TrailingGroup::Error if header.trim().is_empty() => {
                        return Err(ReportError::malformed(
                            origin,
                            first_line,
                            "blank line after the last complete record",
                        ));
                    }
                    TrailingGroup::Error => {
                        return Err(ReportError::malformed(
                            origin,
                            first_line,
                            format!(
                                "trailing record has only a header line: '{}'",
                                header.trim()
                            ),
                        ));
                    }
                    TrailingGroup::Ignore => {
                        logging::log_trailing_ignored(origin, first_line);
                    }
                },
                _ => unreachable!("chunks never yield empty or oversized groups"),
            }
        }

        Ok(samples)
    }
}

impl RecordParser {
    pub fn new(trailing: TrailingGroup) -> Self {
        Self { trailing }
    }

    pub fn trailing(&self) -> TrailingGroup {
        self.trailing
    }

    fn parse_record(
        origin: &str,
        first_line: usize,
        header: &str,
        timing: &str,
        pause: Option<&str>,
    ) -> Result<Sample> {
        let header_tokens: Vec<&str> = header.split_whitespace().collect();
        if header_tokens.len() <= record::MESSAGES_TOKEN {
            return Err(ReportError::malformed(
                origin,
                first_line,
                format!(
                    "header needs at least {} tokens, found {}",
                    record::MESSAGES_TOKEN + 1,
                    header_tokens.len()
                ),
            ));
        }

        let timing_line = first_line + 1;
        let timing_tokens: Vec<&str> = timing.split_whitespace().collect();
        if timing_tokens.len() <= record::ELAPSED_TOKEN {
            return Err(ReportError::malformed(
                origin,
                timing_line,
                format!(
                    "timing line needs at least {} tokens, found {}",
                    record::ELAPSED_TOKEN + 1,
                    timing_tokens.len()
                ),
            ));
        }

        let threads: u32 = parse_field(
            origin,
            first_line,
            "thread count",
            header_tokens[record::THREADS_TOKEN],
        )?;
        let messages: u64 = parse_field(
            origin,
            first_line,
            "message count",
            header_tokens[record::MESSAGES_TOKEN],
        )?;
        let elapsed = parse_seconds(
            origin,
            timing_line,
            "elapsed time",
            timing_tokens[record::ELAPSED_TOKEN],
        )?;
        if elapsed == 0.0 {
            return Err(ReportError::malformed(
                origin,
                timing_line,
                "elapsed time must be greater than zero",
            ));
        }
        if !throughput(messages, elapsed).is_finite() {
            return Err(ReportError::malformed(
                origin,
                timing_line,
                format!("elapsed time '{elapsed:e}' is too small for {messages} messages"),
            ));
        }

        let pause = match pause.map(str::trim) {
            None | Some("") => 0.0,
            Some(value) => parse_seconds(origin, first_line + 2, "pause time", value)?,
        };

        Ok(Sample::new(
            header_tokens[record::LOGGER_TOKEN],
            threads,
            messages,
            elapsed,
            pause,
        ))
    }
}

fn parse_field<T: FromStr>(origin: &str, line: usize, field: &str, token: &str) -> Result<T> {
    token.parse().map_err(|_| {
        ReportError::malformed(origin, line, format!("{field} '{token}' is not a valid number"))
    })
}

fn parse_seconds(origin: &str, line: usize, field: &str, token: &str) -> Result<f64> {
    let value: f64 = parse_field(origin, line, field, token)?;
    if !value.is_finite() || value < 0.0 {
        return Err(ReportError::malformed(
            origin,
            line,
            format!("{field} '{token}' must be a finite, non-negative number of seconds"),
        ));
    }
    if value > record::MAX_SECONDS {
        return Err(ReportError::malformed(
            origin,
            line,
            format!("{field} '{token}' exceeds {:e} seconds", record::MAX_SECONDS),
        ));
    }
    Ok(value)
}
