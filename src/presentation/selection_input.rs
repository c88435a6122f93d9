// Line-oriented selection input: each non-empty line selects a period id
use crate::application::chart_controller::ChartTransition;
use crate::application::period_coordinator::PeriodSelectionCoordinator;
use anyhow::Context;
use futures::StreamExt;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinSet};
use tokio_stream::wrappers::LinesStream;

type SelectionOutcome = (String, anyhow::Result<ChartTransition>);

/// Feed selections from `input` into the coordinator until EOF.
///
/// Selections are begun in input order so later lines supersede earlier
/// ones; fetches complete concurrently. Returns the number of accepted
/// selections once every fetch has settled.
pub async fn run_selection_loop<R>(
    coordinator: Arc<PeriodSelectionCoordinator>,
    input: R,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = LinesStream::new(input.lines());
    let mut in_flight: JoinSet<SelectionOutcome> = JoinSet::new();
    let mut accepted = 0;

    while let Some(line) = lines.next().await {
        let line = line.context("Failed to read selection input")?;
        let period_id = line.trim();
        if period_id.is_empty() {
            continue;
        }

        match coordinator.begin_selection(period_id).await {
            Ok(pending) => {
                accepted += 1;
                let coordinator = coordinator.clone();
                in_flight.spawn(async move {
                    let period_id = pending.period_id.clone();
                    (period_id, coordinator.complete(pending).await)
                });
            }
            Err(e) => tracing::warn!("Ignoring selection: {}", e),
        }

        while let Some(outcome) = in_flight.try_join_next() {
            report(outcome);
        }
    }

    while let Some(outcome) = in_flight.join_next().await {
        report(outcome);
    }

    Ok(accepted)
}

fn report(outcome: Result<SelectionOutcome, JoinError>) {
    match outcome {
        Ok((period_id, Ok(transition))) => {
            tracing::info!("Period {}: {:?}", period_id, transition);
        }
        Ok((period_id, Err(e))) => {
            tracing::error!("Period {} was not applied: {:#}", period_id, e);
        }
        Err(e) => tracing::error!("Selection task failed: {}", e),
    }
}
