// Data source trait for period payloads
use crate::domain::telemetry::PeriodPayload;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum PeriodSourceError {
    #[error("unknown period '{0}'")]
    UnknownPeriod(String),

    #[error("period '{period}' request failed with status {status}: {body}")]
    Status {
        period: String,
        status: u16,
        body: String,
    },
}

#[async_trait]
pub trait PeriodDataSource: Send + Sync {
    /// Fetch metadata and raw points for one period id
    async fn fetch_period(&self, period_id: &str) -> anyhow::Result<PeriodPayload>;
}
