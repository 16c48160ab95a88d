// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use crate::application::clock::ClockController;
use crate::application::dashboard_service::DashboardService;
use crate::application::example_data::ExampleMetricSource;
use crate::application::metric_source::MetricSource;
use crate::application::streaming_service::StreamingDashboardService;
use crate::infrastructure::config::load_config;
use crate::infrastructure::http_metric_source::HttpMetricSource;
use crate::infrastructure::layout_store::LayoutStore;
use crate::presentation::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_config().context("Failed to load configuration")?;

    // Pick the metric source (infrastructure layer)
    let source: Arc<dyn MetricSource> = match config.source.example_variant() {
        Some(variant) => {
            tracing::info!("Using example data ({:?}) instead of a live backend", variant);
            Arc::new(ExampleMetricSource::new(
                variant,
                config.source.count,
                config.source.interval_ms,
            ))
        }
        None => {
            tracing::info!("Polling metrics from {}", config.backend.base_url);
            Arc::new(HttpMetricSource::new(
                config.backend.base_url.clone(),
                Duration::from_millis(config.backend.timeout_ms),
            ))
        }
    };

    // Create services (application layer)
    let dashboard_service = DashboardService::new(source, config.chart.clone());
    let streaming_service = StreamingDashboardService::new(
        dashboard_service.clone(),
        Duration::from_millis(config.poll.interval_ms),
    );

    // Create application state; the clock ticks until the state is dropped
    let state = Arc::new(AppState {
        dashboard_service,
        streaming_service,
        clock: Arc::new(ClockController::mount(Duration::from_secs(1))),
        layout_store: Arc::new(LayoutStore::new(&config.layout.path)),
    });

    // Build router (presentation layer)
    let router = presentation::router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!("Starting focus-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
