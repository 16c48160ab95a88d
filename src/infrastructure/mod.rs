// Infrastructure layer - External dependencies and adapters
pub mod chunked_json;
pub mod config;
pub mod http_metric_source;
pub mod http_response;
pub mod json_mapper;
pub mod layout_store;
