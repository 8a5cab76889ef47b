use std::path::PathBuf;

use anyhow::Context;
use demographic_analyzer::{AnalyzerConfig, DemographicAnalyzer, load_dataset};
use log::info;

const DEFAULT_DATA_FILE: &str = "adult.data.csv";

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut json = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => path = Some(PathBuf::from(arg)),
        }
    }
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    let mut config = AnalyzerConfig::from_env().context("Invalid analyzer configuration")?;
    if json {
        config = config.quiet();
    }
    info!("{}", config.to_string().trim_end());

    let dataset = load_dataset(&path, &config)
        .with_context(|| format!("Failed to load dataset from {}", path.display()))?;

    let summary = DemographicAnalyzer::with_config(config)
        .analyze(&dataset)
        .context("Failed to compute demographic statistics")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
