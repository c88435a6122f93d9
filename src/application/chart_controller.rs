// Chart state controller - Creates the chart once, then updates it in place
use crate::application::chart_renderer::{ChartHandle, ChartRenderer};
use crate::domain::chart_config::{ChartConfigBuilder, split_series};
use crate::domain::normalize::normalize_points;
use crate::domain::telemetry::PeriodPayload;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPhase {
    Uninitialized,
    Rendered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTransition {
    /// First load materialized the chart
    Created,
    /// Buffers of the existing chart were replaced
    Updated,
    /// Result was older than the data already on the chart and was dropped
    Discarded,
}

/// Sequence number handed out per selection request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestGeneration(u64);

enum ChartState {
    Uninitialized,
    Rendered(Box<dyn ChartHandle>),
}

/// Label and value buffers of the live chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSnapshot {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

pub struct ChartStateController {
    renderer: Arc<dyn ChartRenderer>,
    state: ChartState,
    latest_generation: u64,
    applied_generation: u64,
}

impl ChartStateController {
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> Self {
        Self {
            renderer,
            state: ChartState::Uninitialized,
            latest_generation: 0,
            applied_generation: 0,
        }
    }

    pub fn phase(&self) -> ChartPhase {
        match self.state {
            ChartState::Uninitialized => ChartPhase::Uninitialized,
            ChartState::Rendered(_) => ChartPhase::Rendered,
        }
    }

    pub fn instance(&self) -> Option<&dyn ChartHandle> {
        match &self.state {
            ChartState::Uninitialized => None,
            ChartState::Rendered(handle) => Some(handle.as_ref()),
        }
    }

    pub fn snapshot(&self) -> Option<ChartSnapshot> {
        self.instance().map(|handle| ChartSnapshot {
            labels: handle.labels().to_vec(),
            values: handle.values().to_vec(),
        })
    }

    /// Issue a generation for a new request, newer than all earlier ones
    pub fn next_generation(&mut self) -> RequestGeneration {
        self.latest_generation += 1;
        RequestGeneration(self.latest_generation)
    }

    /// A result is stale once the chart shows data from the same or a newer request
    pub fn is_stale(&self, generation: RequestGeneration) -> bool {
        generation.0 <= self.applied_generation
    }

    /// Apply a payload unless a newer request's data is already on the chart
    pub fn apply_for(
        &mut self,
        generation: RequestGeneration,
        payload: PeriodPayload,
    ) -> anyhow::Result<ChartTransition> {
        if self.is_stale(generation) {
            tracing::debug!(
                "Discarding result of request {} (chart shows request {})",
                generation.0,
                self.applied_generation
            );
            return Ok(ChartTransition::Discarded);
        }

        let transition = self.apply(payload)?;
        self.applied_generation = generation.0;
        Ok(transition)
    }

    /// Create the chart on first load, otherwise swap its buffers and redraw.
    ///
    /// A failed redraw restores the previous buffers before returning the error.
    pub fn apply(&mut self, payload: PeriodPayload) -> anyhow::Result<ChartTransition> {
        let points = normalize_points(&payload.data);

        match &mut self.state {
            ChartState::Uninitialized => {
                let config = ChartConfigBuilder::build(&payload.metadata, &points);
                let handle = self.renderer.create(&config)?;
                self.state = ChartState::Rendered(handle);

                tracing::info!(
                    "Created {:?} chart '{}' with {} points",
                    payload.metadata.chart_type,
                    payload.metadata.main_label,
                    points.len()
                );
                Ok(ChartTransition::Created)
            }
            ChartState::Rendered(handle) => {
                let (labels, values) = split_series(&points);
                let previous_labels = std::mem::replace(handle.labels_mut(), labels);
                let previous_values = std::mem::replace(handle.values_mut(), values);
                if let Err(e) = handle.update() {
                    *handle.labels_mut() = previous_labels;
                    *handle.values_mut() = previous_values;
                    return Err(e);
                }

                tracing::debug!("Updated chart with {} points", points.len());
                Ok(ChartTransition::Updated)
            }
        }
    }
}
