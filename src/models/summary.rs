//! The ten demographic statistics and their textual report

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::algorithm::frequency::FrequencyTable;

/// Names of the statistics in a [`DemographicSummary`], in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    RaceCount,
    AverageAgeMen,
    PercentageBachelors,
    HigherEducationRichPercentage,
    LowerEducationRichPercentage,
    MinWorkHours,
    RichPercentage,
    HighestEarningCountry,
    HighestEarningCountryPercentage,
    TopInOccupation,
}

impl Statistic {
    pub const ALL: [Self; 10] = [
        Self::RaceCount,
        Self::AverageAgeMen,
        Self::PercentageBachelors,
        Self::HigherEducationRichPercentage,
        Self::LowerEducationRichPercentage,
        Self::MinWorkHours,
        Self::RichPercentage,
        Self::HighestEarningCountry,
        Self::HighestEarningCountryPercentage,
        Self::TopInOccupation,
    ];

    /// Key under which the statistic is serialized
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::RaceCount => "race_count",
            Self::AverageAgeMen => "average_age_men",
            Self::PercentageBachelors => "percentage_bachelors",
            Self::HigherEducationRichPercentage => "higher_education_rich_percentage",
            Self::LowerEducationRichPercentage => "lower_education_rich_percentage",
            Self::MinWorkHours => "min_work_hours",
            Self::RichPercentage => "rich_percentage",
            Self::HighestEarningCountry => "highest_earning_country",
            Self::HighestEarningCountryPercentage => "highest_earning_country_percentage",
            Self::TopInOccupation => "top_IN_occupation",
        }
    }

    /// Whether the value is a percentage in `[0, 100]`
    #[must_use]
    pub const fn is_percentage(self) -> bool {
        matches!(
            self,
            Self::PercentageBachelors
                | Self::HigherEducationRichPercentage
                | Self::LowerEducationRichPercentage
                | Self::RichPercentage
                | Self::HighestEarningCountryPercentage
        )
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single statistic value, for keyed access
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue<'a> {
    Counts(&'a FrequencyTable),
    Number(f64),
    Label(&'a str),
}

impl StatValue<'_> {
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_label(&self) -> Option<&str> {
        match self {
            Self::Label(label) => Some(*label),
            _ => None,
        }
    }
}

/// Descriptive statistics computed over one dataset
///
/// Every mean and percentage is already rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemographicSummary {
    /// Rows per race, ordered by descending count
    pub race_count: FrequencyTable,
    pub average_age_men: f64,
    pub percentage_bachelors: f64,
    pub higher_education_rich_percentage: f64,
    pub lower_education_rich_percentage: f64,
    /// Smallest parseable `hours-per-week`
    pub min_work_hours: f64,
    /// Share of `>50K` earners among those working `min_work_hours`
    pub rich_percentage: f64,
    pub highest_earning_country: String,
    /// `>50K` earners of that country as a share of all rows
    pub highest_earning_country_percentage: f64,
    #[serde(rename = "top_IN_occupation")]
    pub top_in_occupation: String,
}

impl DemographicSummary {
    /// Look a statistic up by name
    #[must_use]
    pub fn get(&self, statistic: Statistic) -> StatValue<'_> {
        match statistic {
            Statistic::RaceCount => StatValue::Counts(&self.race_count),
            Statistic::AverageAgeMen => StatValue::Number(self.average_age_men),
            Statistic::PercentageBachelors => StatValue::Number(self.percentage_bachelors),
            Statistic::HigherEducationRichPercentage => {
                StatValue::Number(self.higher_education_rich_percentage)
            }
            Statistic::LowerEducationRichPercentage => {
                StatValue::Number(self.lower_education_rich_percentage)
            }
            Statistic::MinWorkHours => StatValue::Number(self.min_work_hours),
            Statistic::RichPercentage => StatValue::Number(self.rich_percentage),
            Statistic::HighestEarningCountry => StatValue::Label(&self.highest_earning_country),
            Statistic::HighestEarningCountryPercentage => {
                StatValue::Number(self.highest_earning_country_percentage)
            }
            Statistic::TopInOccupation => StatValue::Label(&self.top_in_occupation),
        }
    }

    /// All percentage values, paired with their names
    pub fn percentages(&self) -> impl Iterator<Item = (Statistic, f64)> + '_ {
        Statistic::ALL
            .into_iter()
            .filter(|statistic| statistic.is_percentage())
            .filter_map(|statistic| Some((statistic, self.get(statistic).as_number()?)))
    }

    /// The summary as a JSON object keyed by statistic name
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Whole hours print without decimals, fractional hours as-is
struct Hours(f64);

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for DemographicSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let races = self
            .race_count
            .iter()
            .map(|(race, count)| format!("{race}: {count}"))
            .join(", ");

        writeln!(f, "Number of each race: {races}")?;
        writeln!(f, "Average age of men: {:.1}", self.average_age_men)?;
        writeln!(
            f,
            "Percentage with Bachelors degrees: {:.1}%",
            self.percentage_bachelors
        )?;
        writeln!(
            f,
            "Percentage with higher education that earn >50K: {:.1}%",
            self.higher_education_rich_percentage
        )?;
        writeln!(
            f,
            "Percentage without higher education that earn >50K: {:.1}%",
            self.lower_education_rich_percentage
        )?;
        writeln!(f, "Min work time: {} hours/week", Hours(self.min_work_hours))?;
        writeln!(
            f,
            "Percentage of rich among those who work fewest hours: {:.1}%",
            self.rich_percentage
        )?;
        writeln!(
            f,
            "Country with highest percentage of rich: {}",
            self.highest_earning_country
        )?;
        writeln!(
            f,
            "Highest percentage of rich people in country: {:.1}%",
            self.highest_earning_country_percentage
        )?;
        writeln!(f, "Top occupations in India: {}", self.top_in_occupation)
    }
}
