//! Demographic statistics over the Adult census dataset
//!
//! [`DemographicAnalyzer::compute`] makes a few linear passes over an
//! immutable [`Dataset`] and returns a freshly built [`DemographicSummary`].
//! Any statistic whose candidate subset is empty fails the whole computation
//! with [`AnalyzerError::EmptySubset`]; no partial summary is returned.

use std::time::Instant;

use log::{debug, info};

use crate::algorithm::coerce::{coerce_numeric, mean, parse_age, percentage, round_tenth};
use crate::algorithm::frequency::FrequencyTable;
use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};
use crate::models::row::{Column, Dataset, Row};
use crate::models::summary::{DemographicSummary, Statistic};

/// Education levels counted as higher education
pub const HIGHER_EDUCATION: [&str; 3] = ["Bachelors", "Masters", "Doctorate"];
/// Salary label of the high earners
pub const RICH_SALARY: &str = ">50K";

const MALE: &str = "Male";
const BACHELORS: &str = "Bachelors";
const INDIA: &str = "India";

fn is_rich(row: &Row) -> bool {
    row.get(Column::Salary) == RICH_SALARY
}

fn has_higher_education(row: &Row) -> bool {
    HIGHER_EDUCATION.contains(&row.get(Column::Education))
}

/// Computes the demographic statistics for a dataset
#[derive(Debug, Clone, Default)]
pub struct DemographicAnalyzer {
    config: AnalyzerConfig,
}

impl DemographicAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Compute the summary, printing the report if the configuration asks for it
    pub fn analyze(&self, dataset: &Dataset) -> Result<DemographicSummary> {
        Self::compute(dataset, self.config.print_report)
    }

    /// Compute the ten statistics for `dataset`.
    ///
    /// When `report` is true the summary is also written to standard output.
    /// The returned value does not depend on `report`.
    pub fn compute(dataset: &Dataset, report: bool) -> Result<DemographicSummary> {
        let start = Instant::now();
        let rows = dataset.rows();
        let total = rows.len();
        debug!("Computing demographic statistics over {total} rows");

        let race_count = race_count(rows);
        let average_age_men = average_age_men(rows)?;
        let percentage_bachelors = percentage(
            rows.iter()
                .filter(|row| row.get(Column::Education) == BACHELORS)
                .count(),
            total,
            Statistic::PercentageBachelors,
        )?;
        let (higher_education_rich_percentage, lower_education_rich_percentage) =
            education_rich_percentages(rows)?;

        let hours: Vec<Option<f64>> = rows
            .iter()
            .map(|row| coerce_numeric(row.get(Column::HoursPerWeek)))
            .collect();
        let missing_hours = hours.iter().filter(|value| value.is_none()).count();
        if missing_hours > 0 {
            debug!("{missing_hours} rows have no numeric hours-per-week and are ignored");
        }
        let min_work_hours = min_work_hours(&hours)?;
        let rich_percentage = min_hours_rich_percentage(rows, &hours, min_work_hours)?;

        let (highest_earning_country, highest_earning_country_percentage) =
            highest_earning_country(rows)?;
        let top_in_occupation = top_occupation_in(rows, INDIA)?;

        let summary = DemographicSummary {
            race_count,
            average_age_men: round_tenth(average_age_men),
            percentage_bachelors: round_tenth(percentage_bachelors),
            higher_education_rich_percentage: round_tenth(higher_education_rich_percentage),
            lower_education_rich_percentage: round_tenth(lower_education_rich_percentage),
            min_work_hours,
            rich_percentage: round_tenth(rich_percentage),
            highest_earning_country,
            highest_earning_country_percentage: round_tenth(highest_earning_country_percentage),
            top_in_occupation,
        };

        info!(
            "Computed demographic statistics for {total} rows in {:?}",
            start.elapsed()
        );

        if report {
            print!("{summary}");
        }

        Ok(summary)
    }
}

/// Rows per race, most frequent first
fn race_count(rows: &[Row]) -> FrequencyTable {
    rows.iter()
        .map(|row| row.get(Column::Race))
        .collect::<FrequencyTable>()
        .sorted_desc()
}

fn average_age_men(rows: &[Row]) -> Result<f64> {
    let ages = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.get(Column::Sex) == MALE)
        .map(|(position, row)| parse_age(position, row.get(Column::Age)))
        .collect::<Result<Vec<_>>>()?;
    mean(&ages, Statistic::AverageAgeMen)
}

/// `>50K` share within the higher-education partition and within its complement
fn education_rich_percentages(rows: &[Row]) -> Result<(f64, f64)> {
    let (mut higher, mut higher_rich) = (0, 0);
    let (mut lower, mut lower_rich) = (0, 0);

    for row in rows {
        let rich = usize::from(is_rich(row));
        if has_higher_education(row) {
            higher += 1;
            higher_rich += rich;
        } else {
            lower += 1;
            lower_rich += rich;
        }
    }

    Ok((
        percentage(higher_rich, higher, Statistic::HigherEducationRichPercentage)?,
        percentage(lower_rich, lower, Statistic::LowerEducationRichPercentage)?,
    ))
}

fn min_work_hours(hours: &[Option<f64>]) -> Result<f64> {
    hours
        .iter()
        .flatten()
        .copied()
        .reduce(f64::min)
        .ok_or(AnalyzerError::empty(Statistic::MinWorkHours))
}

/// `>50K` share among rows working exactly `min_hours`
fn min_hours_rich_percentage(
    rows: &[Row],
    hours: &[Option<f64>],
    min_hours: f64,
) -> Result<f64> {
    let (workers, rich) = rows
        .iter()
        .zip(hours)
        .filter(|(_, value)| **value == Some(min_hours))
        .fold((0, 0), |(workers, rich), (row, _)| {
            (workers + 1, rich + usize::from(is_rich(row)))
        });
    percentage(rich, workers, Statistic::RichPercentage)
}

/// Country with the most `>50K` rows and that count as a share of all rows
fn highest_earning_country(rows: &[Row]) -> Result<(String, f64)> {
    let country_counts = rows
        .iter()
        .filter(|row| is_rich(row))
        .map(|row| row.get(Column::NativeCountry))
        .collect::<FrequencyTable>()
        .sorted_desc();

    let (country, count) = country_counts
        .argmax()
        .ok_or(AnalyzerError::empty(Statistic::HighestEarningCountry))?;
    let share = percentage(count, rows.len(), Statistic::HighestEarningCountryPercentage)?;
    Ok((country.to_owned(), share))
}

/// Most common occupation among `>50K` earners from `country`
fn top_occupation_in(rows: &[Row], country: &str) -> Result<String> {
    rows.iter()
        .filter(|row| is_rich(row) && row.get(Column::NativeCountry) == country)
        .map(|row| row.get(Column::Occupation))
        .collect::<FrequencyTable>()
        .mode()
        .map(str::to_owned)
        .ok_or(AnalyzerError::empty(Statistic::TopInOccupation))
}
