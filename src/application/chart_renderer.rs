// Rendering capability consumed by the chart controller
use crate::domain::chart_config::ChartConfig;

/// Creates live chart instances from a configuration
pub trait ChartRenderer: Send + Sync {
    fn create(&self, config: &ChartConfig) -> anyhow::Result<Box<dyn ChartHandle>>;
}

/// A live chart whose buffers may be overwritten before calling `update`
pub trait ChartHandle: Send {
    fn labels(&self) -> &[String];

    fn values(&self) -> &[f64];

    fn labels_mut(&mut self) -> &mut Vec<String>;

    fn values_mut(&mut self) -> &mut Vec<f64>;

    /// Redraw the chart from its current buffers
    fn update(&mut self) -> anyhow::Result<()>;
}
