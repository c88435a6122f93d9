// In-memory fakes for the renderer and data source traits
use crate::application::chart_renderer::{ChartHandle, ChartRenderer};
use crate::application::period_source::{PeriodDataSource, PeriodSourceError};
use crate::domain::chart_config::ChartConfig;
use crate::domain::telemetry::{ChartKind, PeriodPayload, SeriesMetadata, TimeSeriesPoint};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub instance: usize,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Default)]
pub struct RenderLog {
    pub created: Vec<RenderedFrame>,
    pub updated: Vec<RenderedFrame>,
}

#[derive(Clone, Default)]
pub struct RecordingRenderer {
    log: Arc<Mutex<RenderLog>>,
    fail_updates: Arc<Mutex<bool>>,
}

impl RecordingRenderer {
    pub fn created(&self) -> Vec<RenderedFrame> {
        self.log.lock().unwrap().created.clone()
    }

    pub fn updated(&self) -> Vec<RenderedFrame> {
        self.log.lock().unwrap().updated.clone()
    }

    pub fn fail_updates(&self, fail: bool) {
        *self.fail_updates.lock().unwrap() = fail;
    }
}

impl ChartRenderer for RecordingRenderer {
    fn create(&self, config: &ChartConfig) -> anyhow::Result<Box<dyn ChartHandle>> {
        let mut log = self.log.lock().unwrap();
        let instance = log.created.len();
        log.created.push(RenderedFrame {
            instance,
            labels: config.labels().to_vec(),
            values: config.values().to_vec(),
        });

        Ok(Box::new(RecordingChart {
            instance,
            labels: config.labels().to_vec(),
            values: config.values().to_vec(),
            log: self.log.clone(),
            fail_updates: self.fail_updates.clone(),
        }))
    }
}

struct RecordingChart {
    instance: usize,
    labels: Vec<String>,
    values: Vec<f64>,
    log: Arc<Mutex<RenderLog>>,
    fail_updates: Arc<Mutex<bool>>,
}

impl ChartHandle for RecordingChart {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn values(&self) -> &[f64] {
        &self.values
    }

    fn labels_mut(&mut self) -> &mut Vec<String> {
        &mut self.labels
    }

    fn values_mut(&mut self) -> &mut Vec<f64> {
        &mut self.values
    }

    fn update(&mut self) -> anyhow::Result<()> {
        if *self.fail_updates.lock().unwrap() {
            anyhow::bail!("redraw failed");
        }
        self.log.lock().unwrap().updated.push(RenderedFrame {
            instance: self.instance,
            labels: self.labels.clone(),
            values: self.values.clone(),
        });
        Ok(())
    }
}

/// Source serving canned payloads; periods mapped to `None` fail
#[derive(Default)]
pub struct ScriptedSource {
    payloads: Mutex<HashMap<String, Option<PeriodPayload>>>,
    fetches: AtomicUsize,
}

impl ScriptedSource {
    pub fn with(self, period_id: &str, payload: PeriodPayload) -> Self {
        self.set(period_id, payload);
        self
    }

    pub fn set(&self, period_id: &str, payload: PeriodPayload) {
        self.payloads
            .lock()
            .unwrap()
            .insert(period_id.to_string(), Some(payload));
    }

    pub fn fail(&self, period_id: &str) {
        self.payloads
            .lock()
            .unwrap()
            .insert(period_id.to_string(), None);
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PeriodDataSource for ScriptedSource {
    async fn fetch_period(&self, period_id: &str) -> anyhow::Result<PeriodPayload> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.payloads.lock().unwrap().get(period_id) {
            Some(Some(payload)) => Ok(payload.clone()),
            Some(None) => anyhow::bail!("connection reset while fetching {}", period_id),
            None => Err(PeriodSourceError::UnknownPeriod(period_id.to_string()).into()),
        }
    }
}

/// Payload with `count` half-hourly points starting at midnight, in reverse order
pub fn half_hourly_payload(count: usize, base: f64) -> PeriodPayload {
    let data = (0..count)
        .rev()
        .map(|i| {
            TimeSeriesPoint::new(
                format!("{:02}:{:02}", i / 2, (i % 2) * 30),
                base + i as f64,
            )
        })
        .collect();

    PeriodPayload::new(SeriesMetadata::new(ChartKind::Line, "Temperature (°C)"), data)
}

pub fn sorted_labels(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{:02}:{:02}", i / 2, (i % 2) * 30))
        .collect()
}
