// HTTP period source
use crate::application::period_source::{PeriodDataSource, PeriodSourceError};
use crate::domain::telemetry::PeriodPayload;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpPeriodSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPeriodSource {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().context("Failed to build HTTP client")?,
        })
    }

    fn build_period_url(&self, period_id: &str) -> String {
        let path: Vec<String> = period_id
            .trim_matches('/')
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        format!("{}/{}", self.base_url, path.join("/"))
    }
}

#[async_trait]
impl PeriodDataSource for HttpPeriodSource {
    async fn fetch_period(&self, period_id: &str) -> Result<PeriodPayload> {
        let url = self.build_period_url(period_id);
        tracing::debug!("Fetching period {} from {}", period_id, url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send request for period {}", period_id))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PeriodSourceError::Status {
                period: period_id.to_string(),
                status,
                body,
            }
            .into());
        }

        response
            .json::<PeriodPayload>()
            .await
            .with_context(|| format!("Failed to parse payload for period {}", period_id))
    }
}
