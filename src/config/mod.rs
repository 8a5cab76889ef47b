//! Configuration for the `DemographicAnalyzer` and its dataset loader.

use std::fmt;

use crate::error::{AnalyzerError, Result};

/// Environment variable toggling the textual report
pub const PRINT_REPORT_ENV: &str = "DEMOGRAPHIC_PRINT_REPORT";
/// Environment variable overriding the field delimiter
pub const DELIMITER_ENV: &str = "DEMOGRAPHIC_DELIMITER";

/// How the loader treats the first record of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// The first record is always a header and is skipped
    Present,
    /// Every record is data
    Absent,
    /// Skip the first record only if it spells out the column names
    Auto,
}

/// Configuration for the `DemographicAnalyzer`
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Whether to print the ten-line report to standard output
    pub print_report: bool,
    /// Header handling for delimited input
    pub header: HeaderMode,
    /// Field delimiter for delimited input
    pub delimiter: u8,
    /// Strip surrounding whitespace from every field
    pub trim_fields: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            print_report: true,
            header: HeaderMode::Auto,
            delimiter: b',',
            trim_fields: true,
        }
    }
}

impl AnalyzerConfig {
    /// Build the default configuration with overrides from the environment
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(
            std::env::var(PRINT_REPORT_ENV).ok().as_deref(),
            std::env::var(DELIMITER_ENV).ok().as_deref(),
        )
    }

    /// Apply raw override values as they would appear in the environment
    pub fn with_overrides(
        mut self,
        print_report: Option<&str>,
        delimiter: Option<&str>,
    ) -> Result<Self> {
        if let Some(raw) = print_report {
            self.print_report = parse_flag(raw).ok_or_else(|| {
                AnalyzerError::Config(format!("{PRINT_REPORT_ENV} must be true/false, got {raw:?}"))
            })?;
        }

        if let Some(raw) = delimiter {
            self.delimiter = match raw.as_bytes() {
                [byte] => *byte,
                _ if raw == "\\t" => b'\t',
                _ => {
                    return Err(AnalyzerError::Config(format!(
                        "{DELIMITER_ENV} must be a single byte, got {raw:?}"
                    )));
                }
            };
        }

        Ok(self)
    }

    /// Disable the textual report
    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.print_report = false;
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl fmt::Display for AnalyzerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analyzer Configuration:")?;
        writeln!(f, "  Print Report: {}", self.print_report)?;
        writeln!(f, "  Header: {:?}", self.header)?;
        writeln!(f, "  Delimiter: {:?}", char::from(self.delimiter))?;
        writeln!(f, "  Trim Fields: {}", self.trim_fields)
    }
}
