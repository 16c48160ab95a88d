// Dashboard service - Use case for building a chart snapshot
use crate::application::metric_source::MetricSource;
use crate::application::normalizer::normalize_or_empty;
use crate::domain::dashboard::{ChartInfo, Dashboard};
use crate::domain::series::{densify, group_by_hour, MAX_DENSIFY};
use crate::infrastructure::config::ChartConfig;
use chrono::Local;
use std::sync::Arc;
use std::time::Instant;

/// Per-request overrides of the configured chart transforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotOptions {
    pub densify: Option<usize>,
    pub min_points: Option<usize>,
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn MetricSource>,
    chart_config: ChartConfig,
}

impl DashboardService {
    pub fn new(source: Arc<dyn MetricSource>, chart_config: ChartConfig) -> Self {
        Self {
            source,
            chart_config,
        }
    }

    pub fn title(&self) -> &str {
        &self.chart_config.dashboard_title
    }

    pub fn chart_info(&self) -> ChartInfo {
        ChartInfo {
            title: self.chart_config.title.clone(),
            label: self.chart_config.label.clone(),
            x_max_ticks: self.chart_config.x_max_ticks,
        }
    }

    /// Fetch, normalize and transform the current metric payload. Never fails:
    /// pipeline errors produce an empty chart with default metadata.
    pub async fn snapshot(&self, options: SnapshotOptions) -> Dashboard {
        let start = Instant::now();

        let fetched = self.source.fetch_payload().await;
        let series = normalize_or_empty(fetched, &Local::now());

        let requested = options.densify.unwrap_or(self.chart_config.densify);
        let n = requested.min(MAX_DENSIFY);
        if n < requested {
            tracing::warn!("Densify count {} capped at {}", requested, MAX_DENSIFY);
        }
        let min_points = options.min_points.unwrap_or(self.chart_config.min_points);

        let hourly = group_by_hour(&series.points, min_points);
        let points = if n > 0 {
            densify(&series.points, n)
        } else {
            series.points
        };

        tracing::debug!(
            "Built snapshot: {} points, {} hour groups in {:?}",
            points.len(),
            hourly.len(),
            start.elapsed()
        );

        Dashboard::new(
            self.chart_config.dashboard_title.clone(),
            self.chart_info(),
            series.basic_info.unwrap_or_default(),
            points,
            hourly,
        )
    }
}
