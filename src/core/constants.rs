/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Flat pivot table with one row per (threads, messages) pair
    pub const CSV: &str = "csv";
    /// Chart bundle (table mode) or band bundle (cut mode)
    pub const JSON: &str = "json";
    /// Host document embedding the bundle
    pub const HTML: &str = "html";

    /// All valid output formats
    pub const ALL: [&str; 3] = [CSV, JSON, HTML];

    /// Formats available in cut mode
    pub const CUT: [&str; 2] = [JSON, HTML];
}

/// Report record layout
pub mod record {
    /// Lines per sample record: header, timing, pause
    pub const LINES_PER_RECORD: usize = 3;
    /// Header token holding the logger name
    pub const LOGGER_TOKEN: usize = 0;
    /// Header token holding the thread count
    pub const THREADS_TOKEN: usize = 4;
    /// Header token holding the message count
    pub const MESSAGES_TOKEN: usize = 6;
    /// Timing token holding the elapsed seconds
    pub const ELAPSED_TOKEN: usize = 3;
    /// Name used in errors when input did not come from a file
    pub const ANONYMOUS_ORIGIN: &str = "<input>";
    /// Largest accepted elapsed or pause time; keeps sums and squares finite
    pub const MAX_SECONDS: f64 = 1e12;
}

/// Trailing group handling
pub mod trailing {
    /// Reject a trailing partial record
    pub const ERROR: &str = "error";
    /// Drop a trailing partial record with a warning
    pub const IGNORE: &str = "ignore";

    pub const ALL: [&str; 2] = [ERROR, IGNORE];
}

/// Units used by every output
pub mod units {
    /// Milliseconds per second, for pause conversion
    pub const MILLIS_PER_SECOND: f64 = 1000.0;
    /// Throughput axis label
    pub const THROUGHPUT: &str = "messages / s";
    /// Pause axis label
    pub const PAUSE: &str = "ms";
    /// Message axis label
    pub const MESSAGES: &str = "number of messages";
    /// Decimal places for every emitted value
    pub const DECIMALS: usize = 2;
}

/// Chart defaults
pub mod charts {
    /// Line chart size in table mode
    pub const LINE_WIDTH: u32 = 600;
    pub const LINE_HEIGHT: u32 = 250;
    /// Candlestick chart size in cut mode
    pub const CUT_WIDTH: u32 = 1200;
    pub const CUT_HEIGHT: u32 = 600;
    /// Largest accepted chart dimension
    pub const MAX_DIMENSION: u32 = 10_000;
    /// Google Charts loader used by the host document
    pub const LOADER_URL: &str = "https://www.gstatic.com/charts/loader.js";
    /// CSV column suffixes
    pub const THROUGHPUT_SUFFIX: &str = "throughput";
    pub const PAUSE_SUFFIX: &str = "gc";
}

/// File naming constants
pub mod files {
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE: &str = ".benchreport.toml";
    /// Parent directories searched for the config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
    pub const CSV_EXTENSION: &str = "csv";
    pub const JSON_EXTENSION: &str = "json";
    pub const HTML_EXTENSION: &str = "html";
}
