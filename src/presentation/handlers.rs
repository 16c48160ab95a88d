// HTTP request handlers
use crate::application::dashboard_service::SnapshotOptions;
use crate::domain::layout::{LayoutPatch, LayoutPreferences};
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::json_mapper::dashboard_to_view;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub densify: Option<usize>,
    pub min_points: Option<usize>,
    /// Only used by the stream endpoint: stop after this many polls.
    pub polls: Option<u32>,
}

impl DashboardQuery {
    fn options(&self) -> SnapshotOptions {
        SnapshotOptions {
            densify: self.densify,
            min_points: self.min_points,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClockView {
    pub time: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current chart snapshot
pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let dashboard = state.dashboard_service.snapshot(query.options()).await;

    match json_response(&dashboard_to_view(dashboard), accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Poll the backend and stream chart updates
pub async fn stream_dashboard(
    Query(query): Query<DashboardQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let rx = state.streaming_service.stream_dashboard(query.options(), query.polls);
    stream_from_receiver(rx, accepts_brotli(&headers)).await
}

pub async fn get_clock(State(state): State<Arc<AppState>>) -> Json<ClockView> {
    Json(ClockView {
        time: state.clock.current_time(),
    })
}

pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<LayoutPreferences> {
    Json(state.layout_store.load().await)
}

pub async fn put_layout(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<LayoutPatch>,
) -> Result<Json<LayoutPreferences>, StatusCode> {
    state.layout_store.update(patch).await.map(Json).map_err(|e| {
        tracing::error!("Error saving layout preferences: {:#}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
