// Period source backed by JSON files on disk
use crate::application::period_source::{PeriodDataSource, PeriodSourceError};
use crate::domain::telemetry::PeriodPayload;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FilePeriodSource {
    directory: PathBuf,
}

impl FilePeriodSource {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// Resolve `<directory>/<period id>.json`, refusing ids that escape the directory
    fn payload_path(&self, period_id: &str) -> Result<PathBuf, PeriodSourceError> {
        let relative = Path::new(period_id);
        let is_plain = !period_id.is_empty()
            && !period_id.split('/').any(str::is_empty)
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if !is_plain {
            return Err(PeriodSourceError::UnknownPeriod(period_id.to_string()));
        }

        Ok(self.directory.join(format!("{}.json", period_id)))
    }
}

#[async_trait]
impl PeriodDataSource for FilePeriodSource {
    async fn fetch_period(&self, period_id: &str) -> Result<PeriodPayload> {
        let path = self.payload_path(period_id)?;
        tracing::debug!("Reading period {} from {}", period_id, path.display());

        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse payload in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize::{normalize_points, parse_point_time};
    use crate::domain::telemetry::ChartKind;

    fn shipped_fixtures() -> FilePeriodSource {
        FilePeriodSource::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures"))
    }

    #[tokio::test]
    async fn test_reads_nested_payload() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("humidity")).unwrap();
        std::fs::write(
            dir.path().join("humidity/day.json"),
            r#"{ "metadata": { "type": "line", "mainLabel": "Humidity (%)" },
                 "data": [ { "time": "01:00", "value": 41 }, { "time": "00:00", "value": 40 } ] }"#,
        )
        .unwrap();

        let source = FilePeriodSource::new(dir.path().to_path_buf());
        let payload = source.fetch_period("humidity/day").await.unwrap();

        assert_eq!(payload.metadata.chart_type, ChartKind::Line);
        assert_eq!(payload.metadata.main_label, "Humidity (%)");
        assert_eq!(payload.data.len(), 2);
        assert_eq!(payload.data[0].time, "01:00");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FilePeriodSource::new(dir.path().to_path_buf());

        assert!(source.fetch_period("temperature/day").await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        let source = FilePeriodSource::new(dir.path().to_path_buf());

        assert!(source.fetch_period("broken").await.is_err());
    }

    #[tokio::test]
    async fn test_rejects_ids_outside_directory() {
        let dir = tempfile::tempdir().unwrap();
        let source = FilePeriodSource::new(dir.path().join("fixtures"));

        for id in ["../secrets", "/etc/passwd", "temperature//day", "", "./day"] {
            let err = source.fetch_period(id).await.unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<PeriodSourceError>(),
                    Some(PeriodSourceError::UnknownPeriod(_))
                ),
                "expected rejection for {:?}",
                id
            );
        }
    }

    #[tokio::test]
    async fn test_month_fixture_sorts_chronologically() {
        let payload = shipped_fixtures()
            .fetch_period("temperature/month")
            .await
            .unwrap();
        assert_eq!(payload.data.len(), 30);
        assert_ne!(payload.data[0].time, "2024-09-01");

        let normalized = normalize_points(&payload.data);
        let labels: Vec<&str> = normalized.iter().map(|p| p.time.as_str()).collect();
        let expected: Vec<String> = (1..=30).map(|d| format!("2024-09-{:02}", d)).collect();
        assert_eq!(labels, expected);
    }

    #[tokio::test]
    async fn test_every_shipped_period_parses() {
        let source = shipped_fixtures();

        for metric in ["temperature", "humidity", "co2", "energy"] {
            for (period, points) in [("day", 48), ("month", 30), ("year", 12)] {
                let id = format!("{}/{}", metric, period);
                let payload = source.fetch_period(&id).await.unwrap();

                assert_eq!(payload.data.len(), points, "{}", id);
                assert!(
                    payload.data.iter().all(|p| parse_point_time(&p.time).is_some()),
                    "{} has unparsable times",
                    id
                );
            }
        }
    }
}
