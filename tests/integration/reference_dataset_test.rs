//! End-to-end runs through load, compute and rounding
//!
//! The sample file under `tests/data/` is always checked. The full Adult
//! dataset (32,561 rows) is checked when `ADULT_DATA_PATH` points at it or it
//! sits at `tests/data/adult.data.csv`.

use demographic_analyzer::{AnalyzerConfig, DemographicAnalyzer, load_dataset};

use crate::utils::{reference_data_path, sample_data_path};

#[test]
fn test_sample_file_statistics() {
    let dataset = load_dataset(&sample_data_path(), &AnalyzerConfig::default()).unwrap();
    assert_eq!(dataset.len(), 34);

    let summary = DemographicAnalyzer::compute(&dataset, true).unwrap();
    assert_eq!(
        summary.race_count.iter().collect::<Vec<_>>(),
        vec![
            ("White", 20),
            ("Black", 7),
            ("Asian-Pac-Islander", 6),
            ("Amer-Indian-Eskimo", 1)
        ]
    );
    // 958 / 24 men
    assert_eq!(summary.average_age_men, 39.9);
    // 8 / 34
    assert_eq!(summary.percentage_bachelors, 23.5);
    // 9 / 14 and 4 / 20
    assert_eq!(summary.higher_education_rich_percentage, 64.3);
    assert_eq!(summary.lower_education_rich_percentage, 20.0);
    // one row has "?" hours; three rows work 13 hours, one of them rich
    assert_eq!(summary.min_work_hours, 13.0);
    assert_eq!(summary.rich_percentage, 33.3);
    // 8 / 34
    assert_eq!(summary.highest_earning_country, "United-States");
    assert_eq!(summary.highest_earning_country_percentage, 23.5);
    assert_eq!(summary.top_in_occupation, "Prof-specialty");

    let report = summary.to_string();
    assert!(report.contains("Min work time: 13 hours/week"));
    assert!(report.contains("Percentage with higher education that earn >50K: 64.3%"));
}

#[test]
fn test_reference_dataset_statistics() {
    let Some(path) = reference_data_path() else {
        eprintln!("Reference dataset not found, skipping");
        return;
    };

    let dataset = load_dataset(&path, &AnalyzerConfig::default()).unwrap();
    assert_eq!(dataset.len(), 32_561);

    let summary = DemographicAnalyzer::compute(&dataset, true).unwrap();
    assert_eq!(summary.race_count.get("White"), 27_816);
    assert_eq!(summary.race_count.total(), dataset.len());
    assert_eq!(summary.average_age_men, 39.4);
    assert_eq!(summary.percentage_bachelors, 16.4);
    assert_eq!(summary.higher_education_rich_percentage, 46.5);
    assert_eq!(summary.lower_education_rich_percentage, 17.4);
    assert_eq!(summary.min_work_hours, 1.0);
    assert_eq!(summary.rich_percentage, 10.0);
    assert_eq!(summary.highest_earning_country, "United-States");
    assert_eq!(summary.highest_earning_country_percentage, 24.6);
    assert_eq!(summary.top_in_occupation, "Prof-specialty");
}
