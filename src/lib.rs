//! A Rust library for computing descriptive statistics over the Adult census
//! dataset, with a delimited-text loader and a printable report.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod reader;

// Re-export the most common types for easier use
// Core types
pub use config::{AnalyzerConfig, HeaderMode};
pub use error::{AnalyzerError, Result};
pub use models::{Column, Dataset, DemographicSummary, Row, StatValue, Statistic};

// Analysis
pub use algorithm::{DemographicAnalyzer, FrequencyTable};

// Loading
pub use reader::{load_dataset, read_dataset};
