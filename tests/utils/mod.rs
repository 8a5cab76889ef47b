use std::path::PathBuf;

use demographic_analyzer::{Column, Dataset};

/// Environment variable pointing at a copy of `adult.data.csv`
pub const ADULT_DATA_ENV: &str = "ADULT_DATA_PATH";

/// Directory holding the checked-in test data
#[must_use]
pub fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

/// Small Adult-format sample with a header line
#[must_use]
pub fn sample_data_path() -> PathBuf {
    test_data_dir().join("adult_sample.csv")
}

/// Location of the full reference dataset, if one is available
#[must_use]
pub fn reference_data_path() -> Option<PathBuf> {
    let path = std::env::var(ADULT_DATA_ENV)
        .map_or_else(|_| test_data_dir().join("adult.data.csv"), PathBuf::from);
    path.exists().then_some(path)
}

/// Builder for one test record with plausible defaults
#[derive(Debug, Clone)]
pub struct Person {
    fields: Vec<String>,
}

impl Default for Person {
    fn default() -> Self {
        let fields = [
            "39", "Private", "77516", "HS-grad", "9", "Never-married", "Adm-clerical",
            "Not-in-family", "White", "Female", "0", "0", "40", "United-States", "<=50K",
        ];
        Self {
            fields: fields.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Person {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, column: Column, value: &str) -> Self {
        self.fields[column.index()] = value.to_string();
        self
    }

    #[must_use]
    pub fn age(self, age: &str) -> Self {
        self.with(Column::Age, age)
    }

    #[must_use]
    pub fn education(self, education: &str) -> Self {
        self.with(Column::Education, education)
    }

    #[must_use]
    pub fn race(self, race: &str) -> Self {
        self.with(Column::Race, race)
    }

    #[must_use]
    pub fn male(self) -> Self {
        self.with(Column::Sex, "Male")
    }

    #[must_use]
    pub fn hours(self, hours: &str) -> Self {
        self.with(Column::HoursPerWeek, hours)
    }

    #[must_use]
    pub fn country(self, country: &str) -> Self {
        self.with(Column::NativeCountry, country)
    }

    #[must_use]
    pub fn rich(self) -> Self {
        self.with(Column::Salary, ">50K")
    }

    #[must_use]
    pub fn occupation(self, occupation: &str) -> Self {
        self.with(Column::Occupation, occupation)
    }

    #[must_use]
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }

    #[must_use]
    pub fn to_line(&self) -> String {
        self.fields.join(",")
    }
}

/// Build a dataset from test records
#[must_use]
pub fn dataset(people: Vec<Person>) -> Dataset {
    Dataset::from_records(people.into_iter().map(Person::into_fields))
        .expect("test records have 15 fields")
}

/// Eight people covering every statistic
///
/// Expected values: White 4, Black 2, Asian-Pac-Islander 1,
/// Amer-Indian-Eskimo 1; men average 44.0; 25.0% Bachelors; 75.0% of higher
/// and 50.0% of lower education rich; min 1 hour with 33.3% rich;
/// United-States 37.5%; Prof-specialty in India.
#[must_use]
pub fn small_population() -> Dataset {
    dataset(vec![
        Person::new()
            .age("40")
            .education("Bachelors")
            .male()
            .rich()
            .occupation("Exec-managerial"),
        Person::new().age("30").hours("20").occupation("Sales"),
        Person::new()
            .age("50")
            .education("Masters")
            .race("Black")
            .male()
            .hours("1")
            .country("India")
            .rich()
            .occupation("Prof-specialty"),
        Person::new()
            .age("25")
            .race("Black")
            .male()
            .hours("1")
            .country("India")
            .occupation("Sales"),
        Person::new()
            .age("35")
            .education("Doctorate")
            .race("Asian-Pac-Islander")
            .hours("60")
            .country("India")
            .rich()
            .occupation("Prof-specialty"),
        Person::new()
            .age("45")
            .education("Some-college")
            .male()
            .hours("?")
            .rich()
            .occupation("Sales"),
        Person::new().age("22").education("Bachelors").hours("1").country("Mexico"),
        Person::new()
            .age("60")
            .education("11th")
            .race("Amer-Indian-Eskimo")
            .male()
            .hours("35")
            .rich()
            .occupation("Craft-repair"),
    ])
}
