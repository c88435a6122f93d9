// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod file_period_source;
pub mod http_period_source;
pub mod json_renderer;
