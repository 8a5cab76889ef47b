//! Domain models for the demographic analysis
//!
//! Input rows of the fixed census schema and the summary computed from them.

pub mod row;
pub mod summary;

// Re-export commonly used types
pub use row::{COLUMN_COUNT, Column, Dataset, Row};
pub use summary::{DemographicSummary, StatValue, Statistic};
