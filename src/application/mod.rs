// Application layer - Use cases and pipeline orchestration
pub mod clock;
pub mod dashboard_service;
pub mod example_data;
pub mod metric_source;
pub mod normalizer;
pub mod streaming_service;
