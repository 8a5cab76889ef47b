//! Fixed-schema rows of the Adult census dataset
//!
//! Every record carries the same 15 string fields in a fixed order. Fields
//! stay opaque strings; numeric interpretation happens in the analyzer.

use std::fmt;
use std::ops::Index;

use crate::error::{AnalyzerError, Result};

/// Number of fields in every row
pub const COLUMN_COUNT: usize = 15;

/// The columns of the dataset, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Age,
    Workclass,
    Fnlwgt,
    Education,
    EducationNum,
    MaritalStatus,
    Occupation,
    Relationship,
    Race,
    Sex,
    CapitalGain,
    CapitalLoss,
    HoursPerWeek,
    NativeCountry,
    Salary,
}

impl Column {
    /// All columns in file order
    pub const ALL: [Self; COLUMN_COUNT] = [
        Self::Age,
        Self::Workclass,
        Self::Fnlwgt,
        Self::Education,
        Self::EducationNum,
        Self::MaritalStatus,
        Self::Occupation,
        Self::Relationship,
        Self::Race,
        Self::Sex,
        Self::CapitalGain,
        Self::CapitalLoss,
        Self::HoursPerWeek,
        Self::NativeCountry,
        Self::Salary,
    ];

    /// Position of the column within a row
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column name as written in the dataset header
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Workclass => "workclass",
            Self::Fnlwgt => "fnlwgt",
            Self::Education => "education",
            Self::EducationNum => "education-num",
            Self::MaritalStatus => "marital-status",
            Self::Occupation => "occupation",
            Self::Relationship => "relationship",
            Self::Race => "race",
            Self::Sex => "sex",
            Self::CapitalGain => "capital-gain",
            Self::CapitalLoss => "capital-loss",
            Self::HoursPerWeek => "hours-per-week",
            Self::NativeCountry => "native-country",
            Self::Salary => "salary",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One individual's demographic record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Box<[String; COLUMN_COUNT]>,
}

impl Row {
    /// Build a row from exactly 15 fields
    ///
    /// `position` is only used to label a [`AnalyzerError::MalformedRow`].
    pub fn new<I, S>(position: usize, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let found = fields.len();
        let fields = fields.into_boxed_slice().try_into().map_err(|_| {
            AnalyzerError::MalformedRow {
                row: position,
                expected: COLUMN_COUNT,
                found,
            }
        })?;
        Ok(Self { fields })
    }

    /// Raw value of a column
    #[must_use]
    pub fn get(&self, column: Column) -> &str {
        &self.fields[column.index()]
    }

    /// Whether this row spells out the column names, i.e. is a header line
    #[must_use]
    pub fn is_header(&self) -> bool {
        Column::ALL
            .iter()
            .all(|column| self.get(*column) == column.name())
    }
}

impl Index<Column> for Row {
    type Output = str;

    fn index(&self, column: Column) -> &str {
        self.get(column)
    }
}

/// Ordered, immutable collection of rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Validate raw records into a dataset
    pub fn from_records<R, I, S>(records: R) -> Result<Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(position, fields)| Row::new(position, fields))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Number of individuals, duplicates included
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
