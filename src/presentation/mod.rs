// Presentation layer - HTTP routing
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_clock, get_dashboard, get_layout, health_check, put_layout, stream_dashboard,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/stream", get(stream_dashboard))
        .route("/clock", get(get_clock))
        .route("/layout", get(get_layout).put(put_layout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::ClockController;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::example_data::{ExampleMetricSource, ExampleVariant};
    use crate::application::streaming_service::StreamingDashboardService;
    use crate::infrastructure::config::ChartConfig;
    use crate::infrastructure::http_metric_source::HttpMetricSource;
    use crate::infrastructure::layout_store::LayoutStore;
    use crate::application::metric_source::MetricSource;
    use crate::domain::series::MAX_DENSIFY;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use bytes::Buf;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    fn app(source: Arc<dyn MetricSource>, layout_dir: &tempfile::TempDir) -> Router {
        let dashboard_service = DashboardService::new(source, ChartConfig::default());
        let streaming_service = StreamingDashboardService::new(dashboard_service.clone(), Duration::from_millis(5));
        router(Arc::new(AppState {
            dashboard_service,
            streaming_service,
            clock: Arc::new(ClockController::mount(Duration::from_secs(1))),
            layout_store: Arc::new(LayoutStore::new(layout_dir.path().join("layout.json"))),
        }))
    }

    fn preset_app(layout_dir: &tempfile::TempDir) -> Router {
        app(Arc::new(ExampleMetricSource::new(ExampleVariant::Preset, 6, 1000)), layout_dir)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let response = preset_app(&dir)
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dashboard_snapshot_with_densify() {
        let dir = tempfile::tempdir().unwrap();
        let response = preset_app(&dir)
            .oneshot(Request::get("/dashboard?densify=2").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["points"].as_array().unwrap().len(), 5 * 3 + 1);
        assert_eq!(value["title"], "Student Focus Level");
        assert_eq!(value["basicInfo"]["classroom"], "Room 208");
        assert_eq!(value["hourly"], json!([]));
    }

    #[tokio::test]
    async fn test_huge_densify_query_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let response = preset_app(&dir)
            .oneshot(
                Request::get("/dashboard?densify=18446744073709551615")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["points"].as_array().unwrap().len(), 5 * (MAX_DENSIFY + 1) + 1);
    }

    #[tokio::test]
    async fn test_unreachable_backend_renders_empty_chart() {
        let dir = tempfile::tempdir().unwrap();
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = Arc::new(HttpMetricSource::new(format!("http://{}", addr), Duration::from_secs(1)));
        let response = app(source, &dir)
            .oneshot(Request::get("/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["points"], json!([]));
        assert_eq!(value["basicInfo"]["courseName"], "Interdisciplinary Capstone Project");
    }

    #[tokio::test]
    async fn test_layout_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let router = preset_app(&dir);

        let response = router
            .clone()
            .oneshot(Request::get("/layout").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await["leftWidth"], 800.0);

        let response = router
            .clone()
            .oneshot(
                Request::put("/layout")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"leftWidth": 640}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["leftWidth"], 640.0);

        let response = router
            .oneshot(Request::get("/layout").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let value = body_json(response).await;
        assert_eq!(value["leftWidth"], 640.0);
        assert_eq!(value["topHeight"], 300.0);
    }

    #[tokio::test]
    async fn test_clock_reports_hh_mm() {
        let dir = tempfile::tempdir().unwrap();
        let response = preset_app(&dir)
            .oneshot(Request::get("/clock").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let value = body_json(response).await;
        assert_eq!(value["time"].as_str().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_stream_frames_messages() {
        let dir = tempfile::tempdir().unwrap();
        let response = preset_app(&dir)
            .oneshot(Request::get("/dashboard/stream?polls=2").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let mut bytes = response.into_body().collect().await.unwrap().to_bytes();
        let mut types = Vec::new();
        while bytes.has_remaining() {
            let len = bytes.get_u32() as usize;
            let frame = bytes.split_to(len);
            let value: Value = serde_json::from_slice(&frame).unwrap();
            types.push(value["type"].as_str().unwrap().to_string());
        }
        assert_eq!(types, vec!["skeleton", "update", "update", "complete"]);
    }
}
