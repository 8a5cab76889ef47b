//! Algorithm implementations for the demographic analysis
//!
//! This module contains the statistics routine and the counting,
//! coercion and rounding helpers it is built from.

pub mod analyzer;
pub mod coerce;
pub mod frequency;

pub use analyzer::{DemographicAnalyzer, HIGHER_EDUCATION, RICH_SALARY};
pub use frequency::FrequencyTable;
