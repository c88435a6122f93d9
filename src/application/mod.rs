// Application layer - Chart state and period selection use cases
pub mod chart_controller;
pub mod chart_renderer;
pub mod period_coordinator;
pub mod period_source;

#[cfg(test)]
pub mod test_support;
