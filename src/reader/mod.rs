//! Module for reading the census dataset from delimited text.
//!
//! Each line holds one record of 15 fields split on the delimiter alone;
//! quote characters are ordinary field content. A short or long line
//! surfaces as [`AnalyzerError::MalformedRow`] carrying its zero-based data
//! row index, the same index the analyzer reports.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};

use crate::config::{AnalyzerConfig, HeaderMode};
use crate::error::{AnalyzerError, Result};
use crate::models::row::{Dataset, Row};

/// Load a dataset from a file on disk
pub fn load_dataset(path: &Path, config: &AnalyzerConfig) -> Result<Dataset> {
    info!("Loading dataset from {}", path.display());
    let start = Instant::now();

    let file = File::open(path).map_err(|e| {
        AnalyzerError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to open {}: {e}", path.display()),
        ))
    })?;
    let dataset = read_dataset(file, config)?;

    info!(
        "Loaded {} rows from {} in {:?}",
        dataset.len(),
        path.display(),
        start.elapsed()
    );
    Ok(dataset)
}

/// Read a dataset from any byte source
pub fn read_dataset<R: Read>(source: R, config: &AnalyzerConfig) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(config.delimiter)
        .trim(if config.trim_fields {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(source);

    let mut rows = Vec::new();
    let mut first_record = true;
    for (position, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            debug!("Skipping blank record {position}");
            continue;
        }

        if std::mem::take(&mut first_record) && is_header(&record, config.header) {
            debug!("Skipping header record {position}");
            continue;
        }

        rows.push(Row::new(rows.len(), record.iter())?);
    }

    if rows.is_empty() {
        warn!("Dataset contains no data rows");
    }

    Ok(Dataset::from(rows))
}

fn is_header(record: &csv::StringRecord, mode: HeaderMode) -> bool {
    match mode {
        HeaderMode::Present => true,
        HeaderMode::Absent => false,
        HeaderMode::Auto => Row::new(0, record.iter()).is_ok_and(|row| row.is_header()),
    }
}
