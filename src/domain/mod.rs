// Domain layer - Chart data models and pure transforms
pub mod dashboard;
pub mod error;
pub mod layout;
pub mod series;
pub mod telemetry;
pub mod time_label;
