use crate::core::types::MetricKey;
use std::fmt;

/// Comprehensive error types for benchreport operations
#[derive(Debug)]
pub enum ReportError {
    /// A report line does not have the expected token shape, or a numeric
    /// field cannot be parsed
    MalformedRecord {
        /// Input the line came from (file path or `<input>`)
        origin: String,
        /// 1-based line number of the offending line
        line: usize,
        reason: String,
    },

    /// A (logger, threads, messages) combination was requested but never observed
    MissingKey(MetricKey),

    /// Statistics were requested from an aggregate without any samples
    EmptyAggregate,

    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// CSV writing error
    Csv(csv::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Configuration error
    Config(String),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl ReportError {
    pub(crate) fn malformed<O, R>(origin: O, line: usize, reason: R) -> Self
    where
        O: Into<String>,
        R: Into<String>,
    {
        ReportError::MalformedRecord {
            origin: origin.into(),
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::MalformedRecord {
                origin,
                line,
                reason,
            } => write!(f, "Malformed record at {origin}:{line}: {reason}"),
            ReportError::MissingKey(key) => write!(f, "Missing key: no samples for {key}"),
            ReportError::EmptyAggregate => {
                write!(f, "Empty aggregate: no samples were recorded")
            }
            ReportError::Io(err) => write!(f, "IO error: {err}"),
            ReportError::Csv(err) => write!(f, "CSV error: {err}"),
            ReportError::Json(err) => write!(f, "JSON error: {err}"),
            ReportError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            ReportError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ReportError::FileNotFound(path) => write!(f, "File not found: {path}"),
            ReportError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(err) => Some(err),
            ReportError::Csv(err) => Some(err),
            ReportError::Json(err) => Some(err),
            ReportError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err)
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::Csv(err)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Json(err)
    }
}

impl From<toml::de::Error> for ReportError {
    fn from(err: toml::de::Error) -> Self {
        ReportError::TomlParsing(err)
    }
}

/// Type alias for Results using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let malformed = ReportError::malformed("report.txt", 7, "expected at least 7 tokens");
        assert_eq!(
            format!("{malformed}"),
            "Malformed record at report.txt:7: expected at least 7 tokens"
        );

        let missing = ReportError::MissingKey(MetricKey::new("gflogger", 2, 100));
        assert_eq!(
            format!("{missing}"),
            "Missing key: no samples for logger=gflogger threads=2 messages=100"
        );

        let config_error = ReportError::Config("Invalid width".to_string());
        assert_eq!(format!("{config_error}"), "Configuration error: Invalid width");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let report_error = ReportError::from(io_error);

        match report_error {
            ReportError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let report_error = ReportError::from(json_error);

        assert!(matches!(report_error, ReportError::Json(_)));
        assert!(report_error.source().is_some());
        assert!(format!("{report_error}").contains("JSON error:"));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let report_error = ReportError::from(toml_error);

        assert!(matches!(report_error, ReportError::TomlParsing(_)));
        assert!(report_error.source().is_some());
    }

    #[test]
    fn test_error_no_source_variants() {
        let errors_without_source = vec![
            ReportError::malformed(crate::core::constants::record::ANONYMOUS_ORIGIN, 1, "test"),
            ReportError::MissingKey(MetricKey::new("a", 1, 1)),
            ReportError::EmptyAggregate,
            ReportError::Config("test".to_string()),
            ReportError::FileNotFound("test".to_string()),
            ReportError::InvalidArgument("test".to_string()),
        ];

        for error in errors_without_source {
            assert!(error.source().is_none());
            assert!(format!("{error}").contains(':'));
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReportError>();
    }
}
