//! Numeric coercion and rounding helpers

use crate::error::{AnalyzerError, Result};
use crate::models::row::Column;
use crate::models::summary::Statistic;

/// Parse a field as a number, treating anything unparseable as missing.
///
/// Missing is distinct from zero: `"0"` yields `Some(0.0)`, `"?"` yields `None`.
#[must_use]
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Parse an `age` field as an integer
pub fn parse_age(row: usize, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AnalyzerError::Coercion {
            row,
            column: Column::Age.name(),
            value: raw.to_owned(),
        })
}

/// `part / whole * 100`, failing when `whole` is zero
pub fn percentage(part: usize, whole: usize, statistic: Statistic) -> Result<f64> {
    if whole == 0 {
        return Err(AnalyzerError::empty(statistic));
    }
    Ok((part as f64 / whole as f64) * 100.0)
}

/// Arithmetic mean of integer samples, failing on an empty sample
pub fn mean(values: &[i64], statistic: Statistic) -> Result<f64> {
    if values.is_empty() {
        return Err(AnalyzerError::empty(statistic));
    }
    let sum: i64 = values.iter().sum();
    Ok(sum as f64 / values.len() as f64)
}

/// Round to one decimal place.
///
/// Rounds the exact binary value to the nearest tenth, with exact ties going
/// to the even digit. This is what decimal formatting does, so `0.25` becomes
/// `0.2` and `0.35` (stored slightly below) becomes `0.3`.
#[must_use]
pub fn round_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.1}")
        .parse()
        .unwrap_or_else(|_| (value * 10.0).round() / 10.0)
}
