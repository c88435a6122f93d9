// Renderer that materializes the chart as a Chart.js configuration document
use crate::application::chart_renderer::{ChartHandle, ChartRenderer};
use crate::domain::chart_config::ChartConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct JsonChartRenderer {
    output_path: PathBuf,
}

impl JsonChartRenderer {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl ChartRenderer for JsonChartRenderer {
    fn create(&self, config: &ChartConfig) -> Result<Box<dyn ChartHandle>> {
        if let Some(parent) = self.output_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let mut chart = JsonChart {
            config: config.clone(),
            output_path: self.output_path.clone(),
        };
        chart.update()?;
        Ok(Box::new(chart))
    }
}

struct JsonChart {
    config: ChartConfig,
    output_path: PathBuf,
}

impl ChartHandle for JsonChart {
    fn labels(&self) -> &[String] {
        self.config.labels()
    }

    fn values(&self) -> &[f64] {
        self.config.values()
    }

    fn labels_mut(&mut self) -> &mut Vec<String> {
        self.config.labels_mut()
    }

    fn values_mut(&mut self) -> &mut Vec<f64> {
        self.config.values_mut()
    }

    fn update(&mut self) -> Result<()> {
        let document = serde_json::to_vec_pretty(&self.config)?;
        std::fs::write(&self.output_path, document)
            .with_context(|| format!("Failed to write {}", self.output_path.display()))?;

        tracing::debug!(
            "Wrote chart with {} points to {}",
            self.config.labels().len(),
            self.output_path.display()
        );
        Ok(())
    }
}
