// Domain layer - Chart data models and pure transforms
pub mod chart_config;
pub mod normalize;
pub mod telemetry;
