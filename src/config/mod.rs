//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::constants::{charts, files, output_formats, trailing};
use crate::core::error::{ReportError, Result};
use crate::emit::ChartSize;
use crate::parsing::TrailingGroup;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory for generated artifacts
    pub output_dir: Option<String>,

    /// Formats produced in table mode (csv, json, html)
    pub formats: Option<Vec<String>>,

    /// Policy for a trailing header-only record (error, ignore)
    pub trailing_group: Option<String>,

    pub line_chart_width: Option<u32>,
    pub line_chart_height: Option<u32>,
    pub cut_chart_width: Option<u32>,
    pub cut_chart_height: Option<u32>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ReportError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            ReportError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Find and load a config file in `dir` or up to three of its parents
    pub fn load_from_standard_locations_in<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut candidate: PathBuf = dir.as_ref().to_path_buf();
        for _ in 0..=files::CONFIG_SEARCH_DEPTH {
            let path = candidate.join(files::CONFIG_FILE);
            if path.is_file() {
                return Self::load_from_file(&path);
            }
            if !candidate.pop() {
                break;
            }
        }

        Ok(Self::default())
    }

    /// Find and load a config file starting from the current directory
    pub fn load_from_standard_locations() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from_standard_locations_in(cwd)
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref output_dir) = cli_config.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if let Some(ref formats) = cli_config.formats {
            self.formats = Some(formats.clone());
        }
        if cli_config.ignore_trailing {
            self.trailing_group = Some(trailing::IGNORE.to_string());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    pub fn formats_or_default(&self) -> Vec<String> {
        match &self.formats {
            Some(formats) => formats.clone(),
            None => output_formats::ALL.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn trailing_group_or_default(&self) -> &str {
        self.trailing_group.as_deref().unwrap_or(trailing::ERROR)
    }

    pub fn trailing_policy(&self) -> Result<TrailingGroup> {
        TrailingGroup::from_str(self.trailing_group_or_default())
    }

    pub fn line_chart_size(&self) -> ChartSize {
        ChartSize {
            width: self.line_chart_width.unwrap_or(charts::LINE_WIDTH),
            height: self.line_chart_height.unwrap_or(charts::LINE_HEIGHT),
        }
    }

    pub fn cut_chart_size(&self) -> ChartSize {
        ChartSize {
            width: self.cut_chart_width.unwrap_or(charts::CUT_WIDTH),
            height: self.cut_chart_height.unwrap_or(charts::CUT_HEIGHT),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref formats) = self.formats {
            if formats.is_empty() {
                return Err(ReportError::Config(
                    "At least one output format is required.".to_string(),
                ));
            }
            for format in formats {
                if !output_formats::ALL.contains(&format.as_str()) {
                    return Err(ReportError::Config(format!(
                        "Invalid output format '{format}'. Expected one of: {}.",
                        output_formats::ALL.join(", ")
                    )));
                }
            }
        }

        self.trailing_policy()?;

        let dimensions = [
            ("line_chart_width", self.line_chart_width),
            ("line_chart_height", self.line_chart_height),
            ("cut_chart_width", self.cut_chart_width),
            ("cut_chart_height", self.cut_chart_height),
        ];
        for (name, value) in dimensions {
            if let Some(value) = value
                && !(1..=charts::MAX_DIMENSION).contains(&value)
            {
                return Err(ReportError::Config(format!(
                    "{name} of {value} is out of range. Expected a value between 1-{}.",
                    charts::MAX_DIMENSION
                )));
            }
        }

        if let Some(ref dir) = self.output_dir
            && dir.trim().is_empty()
        {
            return Err(ReportError::Config(
                "Output directory cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub output_dir: Option<String>,   // --output-dir
    pub formats: Option<Vec<String>>, // --format
    pub ignore_trailing: bool,        // --ignore-trailing

    pub quiet: bool,   // --quiet
    pub verbose: bool, // --verbose

    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
