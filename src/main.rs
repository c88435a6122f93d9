// Main entry point - Dependency injection and selection loop
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use crate::application::chart_controller::ChartStateController;
use crate::application::period_coordinator::PeriodSelectionCoordinator;
use crate::application::period_source::PeriodDataSource;
use crate::infrastructure::config::{SourceSettings, load_dashboard_config};
use crate::infrastructure::file_period_source::FilePeriodSource;
use crate::infrastructure::http_period_source::HttpPeriodSource;
use crate::infrastructure::json_renderer::JsonChartRenderer;
use crate::presentation::selection_input::run_selection_loop;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = load_dashboard_config()?;
    let periods = config.periods();

    // Create data source (infrastructure layer)
    let source: Arc<dyn PeriodDataSource> = match &config.source {
        SourceSettings::Http {
            base_url,
            timeout_secs,
        } => Arc::new(HttpPeriodSource::new(
            base_url.clone(),
            timeout_secs.map(Duration::from_secs),
        )?),
        SourceSettings::File { directory } => Arc::new(FilePeriodSource::new(directory.clone())),
    };
    let renderer = Arc::new(JsonChartRenderer::new(config.chart.output_path.clone()));

    // Create controller and coordinator (application layer)
    let controller = ChartStateController::new(renderer);
    let coordinator = Arc::new(PeriodSelectionCoordinator::new(periods, source, controller));

    for period in coordinator.periods() {
        tracing::info!("Period '{}' -> {}", period.label, period.id);
    }

    // Initial selection so the chart is populated right away
    match coordinator.start().await {
        Ok(transition) => tracing::info!("Initial selection: {:?}", transition),
        Err(e) => tracing::error!("Initial selection failed: {:#}", e),
    }

    // Further selections arrive one period id per line (presentation layer)
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let accepted = run_selection_loop(coordinator, stdin).await?;
    tracing::info!("Input closed after {} selections", accepted);

    Ok(())
}
