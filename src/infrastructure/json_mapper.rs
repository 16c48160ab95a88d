// Mapper to convert domain models to JSON wire views
use crate::application::streaming_service::StreamEvent;
use crate::domain::dashboard::{BasicInfo, ChartInfo, Dashboard};
use crate::domain::telemetry::{Coordinate, HourGroup};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInfoView {
    pub title: String,
    pub label: String,
    pub x_max_ticks: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub title: String,
    pub chart: ChartInfoView,
    pub basic_info: BasicInfo,
    pub points: Vec<Coordinate>,
    pub hourly: Vec<HourGroup>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StreamMessage {
    #[serde(rename_all = "camelCase")]
    Skeleton { title: String, chart: ChartInfoView },
    Update { dashboard: DashboardView },
    #[serde(rename_all = "camelCase")]
    Complete { polls: u32, duration_ms: i64 },
}

pub fn dashboard_to_view(dashboard: Dashboard) -> DashboardView {
    DashboardView {
        title: dashboard.title,
        chart: chart_to_view(dashboard.chart),
        basic_info: dashboard.basic_info,
        points: dashboard.points,
        hourly: dashboard.hourly,
    }
}

fn chart_to_view(chart: ChartInfo) -> ChartInfoView {
    ChartInfoView {
        title: chart.title,
        label: chart.label,
        x_max_ticks: chart.x_max_ticks,
    }
}

pub fn event_to_message(event: StreamEvent) -> StreamMessage {
    match event {
        StreamEvent::Skeleton { title, chart } => StreamMessage::Skeleton {
            title,
            chart: chart_to_view(chart),
        },
        StreamEvent::Update(dashboard) => StreamMessage::Update {
            dashboard: dashboard_to_view(dashboard),
        },
        StreamEvent::Complete { polls, duration_ms } => StreamMessage::Complete { polls, duration_ms },
    }
}
