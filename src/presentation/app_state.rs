// Application state for HTTP handlers
use crate::application::clock::ClockController;
use crate::application::dashboard_service::DashboardService;
use crate::application::streaming_service::StreamingDashboardService;
use crate::infrastructure::layout_store::LayoutStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub streaming_service: StreamingDashboardService,
    pub clock: Arc<ClockController>,
    pub layout_store: Arc<LayoutStore>,
}
