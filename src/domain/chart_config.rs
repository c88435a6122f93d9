// Declarative chart configuration, serialized in the Chart.js shape
use super::telemetry::{ChartKind, SeriesMetadata, TimeSeriesPoint};
use serde::Serialize;

const BORDER_COLOR: &str = "#2364AA";
const BORDER_WIDTH: u32 = 2;
const GRID_COLOR: &str = "rgba(17, 11, 17, 0.6)";
const TICK_COLOR: &str = "#110B11";
const TOOLTIP_TEXT_COLOR: &str = "#F7F0F5";
const TOOLTIP_BACKGROUND_COLOR: &str = "#110B11";
const LEGEND_LABEL_COLOR: &str = "rgba(17, 11, 17, 1)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartDataConfig,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataConfig {
    pub labels: Vec<String>,
    pub datasets: [DatasetConfig; 1],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetConfig {
    pub label: String,
    pub data: Vec<f64>,
    pub fill: bool,
    pub border_color: &'static str,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: AxisStyle,
    pub y: AxisStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisStyle {
    pub begin_at_zero: bool,
    pub grid: ColorStyle,
    pub ticks: ColorStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStyle {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub tooltip: TooltipStyle,
    pub legend: LegendStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipStyle {
    pub body_color: &'static str,
    pub background_color: &'static str,
    pub title_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendStyle {
    pub labels: ColorStyle,
}

impl ChartConfig {
    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.data.datasets[0].data
    }

    pub fn labels_mut(&mut self) -> &mut Vec<String> {
        &mut self.data.labels
    }

    pub fn values_mut(&mut self) -> &mut Vec<f64> {
        &mut self.data.datasets[0].data
    }
}

impl ChartOptions {
    fn fixed() -> Self {
        let axis = AxisStyle {
            begin_at_zero: false,
            grid: ColorStyle { color: GRID_COLOR },
            ticks: ColorStyle { color: TICK_COLOR },
        };

        Self {
            scales: Scales {
                x: axis.clone(),
                y: axis,
            },
            plugins: Plugins {
                tooltip: TooltipStyle {
                    body_color: TOOLTIP_TEXT_COLOR,
                    background_color: TOOLTIP_BACKGROUND_COLOR,
                    title_color: TOOLTIP_TEXT_COLOR,
                },
                legend: LegendStyle {
                    labels: ColorStyle {
                        color: LEGEND_LABEL_COLOR,
                    },
                },
            },
        }
    }
}

/// Split normalized points into index-aligned label and value buffers
pub fn split_series(points: &[TimeSeriesPoint]) -> (Vec<String>, Vec<f64>) {
    points.iter().map(|p| (p.time.clone(), p.value)).unzip()
}

pub struct ChartConfigBuilder;

impl ChartConfigBuilder {
    /// Build the chart configuration for a normalized series.
    ///
    /// Styling is constant; only the chart type, dataset label and the
    /// label/value buffers depend on the input.
    pub fn build(metadata: &SeriesMetadata, points: &[TimeSeriesPoint]) -> ChartConfig {
        let (labels, values) = split_series(points);

        ChartConfig {
            kind: metadata.chart_type,
            data: ChartDataConfig {
                labels,
                datasets: [DatasetConfig {
                    label: metadata.main_label.clone(),
                    data: values,
                    fill: false,
                    border_color: BORDER_COLOR,
                    border_width: BORDER_WIDTH,
                }],
            },
            options: ChartOptions::fixed(),
        }
    }
}
