// Period selection coordinator - Routes period selections into the chart controller
use crate::application::chart_controller::{
    ChartPhase, ChartSnapshot, ChartStateController, ChartTransition, RequestGeneration,
};
use crate::application::period_source::PeriodDataSource;
use crate::domain::telemetry::Period;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("period '{0}' is not one of the configured periods")]
    UnknownPeriod(String),

    #[error("no periods configured")]
    NoPeriods,
}

/// A selection whose fetch has not completed yet
#[derive(Debug)]
pub struct PendingSelection {
    pub period_id: String,
    generation: RequestGeneration,
}

struct SelectionState {
    controller: ChartStateController,
    active: Option<String>,
}

pub struct PeriodSelectionCoordinator {
    periods: Vec<Period>,
    source: Arc<dyn PeriodDataSource>,
    state: Mutex<SelectionState>,
}

impl PeriodSelectionCoordinator {
    pub fn new(
        periods: Vec<Period>,
        source: Arc<dyn PeriodDataSource>,
        controller: ChartStateController,
    ) -> Self {
        Self {
            periods,
            source,
            state: Mutex::new(SelectionState {
                controller,
                active: None,
            }),
        }
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub async fn active_period(&self) -> Option<String> {
        self.state.lock().await.active.clone()
    }

    pub async fn chart_phase(&self) -> ChartPhase {
        self.state.lock().await.controller.phase()
    }

    pub async fn chart_snapshot(&self) -> Option<ChartSnapshot> {
        self.state.lock().await.controller.snapshot()
    }

    /// Select the first configured period, as if its control had been clicked
    pub async fn start(&self) -> anyhow::Result<ChartTransition> {
        let first = self.periods.first().ok_or(SelectionError::NoPeriods)?;
        let period_id = first.id.clone();
        self.select(&period_id).await
    }

    pub async fn select(&self, period_id: &str) -> anyhow::Result<ChartTransition> {
        let pending = self.begin_selection(period_id).await?;
        self.complete(pending).await
    }

    /// Mark the period active and issue a generation newer than any in flight
    pub async fn begin_selection(
        &self,
        period_id: &str,
    ) -> Result<PendingSelection, SelectionError> {
        if !self.periods.iter().any(|p| p.id == period_id) {
            return Err(SelectionError::UnknownPeriod(period_id.to_string()));
        }

        let mut state = self.state.lock().await;
        state.active = Some(period_id.to_string());
        let generation = state.controller.next_generation();

        tracing::debug!("Selected period {} ({:?})", period_id, generation);
        Ok(PendingSelection {
            period_id: period_id.to_string(),
            generation,
        })
    }

    /// Fetch the selected period and apply it unless newer data is already shown
    pub async fn complete(&self, pending: PendingSelection) -> anyhow::Result<ChartTransition> {
        let payload = match self.source.fetch_period(&pending.period_id).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Fetching period {} failed: {:#}", pending.period_id, e);
                return Err(e);
            }
        };

        let mut state = self.state.lock().await;
        state.controller.apply_for(pending.generation, payload)
    }
}
