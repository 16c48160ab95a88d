// Streaming dashboard service - Polls the metric source and pushes updates
use crate::application::dashboard_service::{DashboardService, SnapshotOptions};
use crate::domain::dashboard::{ChartInfo, Dashboard};
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::IntervalStream;

const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub enum StreamEvent {
    Skeleton { title: String, chart: ChartInfo },
    Update(Dashboard),
    Complete { polls: u32, duration_ms: i64 },
}

#[derive(Clone)]
pub struct StreamingDashboardService {
    dashboard_service: DashboardService,
    poll_interval: Duration,
}

impl StreamingDashboardService {
    pub fn new(dashboard_service: DashboardService, poll_interval: Duration) -> Self {
        Self {
            dashboard_service,
            // tokio::time::interval panics on a zero period.
            poll_interval: poll_interval.max(MIN_POLL_INTERVAL),
        }
    }

    /// Start a polling stream. The skeleton is sent immediately; then one
    /// update per poll until `max_polls` is reached (if given) or the
    /// receiver goes away.
    pub fn stream_dashboard(&self, options: SnapshotOptions, max_polls: Option<u32>) -> mpsc::Receiver<StreamEvent> {
        let (tx, rx) = mpsc::channel(16);
        let service = self.dashboard_service.clone();
        let poll_interval = self.poll_interval;

        tokio::spawn(async move {
            let start_time = Instant::now();

            let skeleton = StreamEvent::Skeleton {
                title: service.title().to_string(),
                chart: service.chart_info(),
            };
            if tx.send(skeleton).await.is_err() {
                return;
            }

            let mut interval = tokio::time::interval(poll_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut ticks = IntervalStream::new(interval);

            let mut polls = 0u32;
            while ticks.next().await.is_some() {
                if max_polls.is_some_and(|max| polls >= max) {
                    break;
                }

                let dashboard = service.snapshot(options).await;
                polls += 1;
                if tx.send(StreamEvent::Update(dashboard)).await.is_err() {
                    tracing::debug!("Stream receiver closed after {} polls", polls);
                    return;
                }
            }

            let duration_ms = start_time.elapsed().as_millis() as i64;
            tracing::info!("Dashboard stream complete: {} polls in {}ms", polls, duration_ms);
            let _ = tx.send(StreamEvent::Complete { polls, duration_ms }).await;
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::example_data::{ExampleMetricSource, ExampleVariant};
    use crate::infrastructure::config::ChartConfig;
    use std::sync::Arc;

    fn streaming() -> StreamingDashboardService {
        let source = Arc::new(ExampleMetricSource::new(ExampleVariant::Preset, 6, 1000));
        let dashboard = DashboardService::new(source, ChartConfig::default());
        StreamingDashboardService::new(dashboard, Duration::from_millis(5))
    }

    #[tokio::test]
    async fn test_stream_sends_skeleton_updates_and_completion() {
        let mut rx = streaming().stream_dashboard(SnapshotOptions::default(), Some(3));

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }

        assert_eq!(events.len(), 5);
        assert!(matches!(&events[0], StreamEvent::Skeleton { chart, .. } if chart.x_max_ticks == 20));
        for event in &events[1..4] {
            match event {
                StreamEvent::Update(dashboard) => assert_eq!(dashboard.points.len(), 6),
                other => panic!("expected update, got {:?}", other),
            }
        }
        assert!(matches!(events[4], StreamEvent::Complete { polls: 3, .. }));
    }

    #[tokio::test]
    async fn test_zero_poll_interval_still_completes() {
        let source = Arc::new(ExampleMetricSource::new(ExampleVariant::Preset, 6, 1000));
        let dashboard = DashboardService::new(source, ChartConfig::default());
        let service = StreamingDashboardService::new(dashboard, Duration::ZERO);

        let mut rx = service.stream_dashboard(SnapshotOptions::default(), Some(2));
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }

        assert_eq!(events.len(), 4);
        assert!(matches!(events[3], StreamEvent::Complete { polls: 2, .. }));
    }

    #[tokio::test]
    async fn test_stream_stops_when_receiver_dropped() {
        let mut rx = streaming().stream_dashboard(SnapshotOptions::default(), None);
        assert!(matches!(rx.recv().await, Some(StreamEvent::Skeleton { .. })));
        assert!(matches!(rx.recv().await, Some(StreamEvent::Update(_))));
        drop(rx);
    }
}
