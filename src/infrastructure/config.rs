use crate::domain::telemetry::Period;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub chart: ChartSettings,
    pub source: SourceSettings,
    #[serde(default)]
    pub periods: Vec<PeriodConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub output_path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceSettings {
    Http {
        base_url: String,
        timeout_secs: Option<u64>,
    },
    File {
        directory: PathBuf,
    },
}

#[derive(Debug, Deserialize, Clone)]
pub struct PeriodConfig {
    pub id: String,
    pub label: String,
}

impl DashboardConfig {
    pub fn periods(&self) -> Vec<Period> {
        self.periods
            .iter()
            .map(|p| Period::new(p.id.clone(), p.label.clone()))
            .collect()
    }
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
