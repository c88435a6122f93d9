// Telemetry data domain models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub time: String,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(time: impl Into<String>, value: f64) -> Self {
        Self {
            time: time.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesMetadata {
    #[serde(alias = "type")]
    pub chart_type: ChartKind,
    pub main_label: String,
}

impl SeriesMetadata {
    pub fn new(chart_type: ChartKind, main_label: impl Into<String>) -> Self {
        Self {
            chart_type,
            main_label: main_label.into(),
        }
    }
}

/// One fetch response for a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodPayload {
    pub metadata: SeriesMetadata,
    #[serde(default)]
    pub data: Vec<TimeSeriesPoint>,
}

impl PeriodPayload {
    pub fn new(metadata: SeriesMetadata, data: Vec<TimeSeriesPoint>) -> Self {
        Self { metadata, data }
    }
}

/// A selectable period control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub id: String,
    pub label: String,
}

impl Period {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
