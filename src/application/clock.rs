// Clock controller - Owns the displayed wall-clock time and its ticking task
use chrono::{DateTime, Local, TimeZone};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Render a time the way the dashboard clock shows it: 24-hour "HH:MM".
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%H:%M").to_string()
}

/// The ticking task lives exactly as long as the controller: it is spawned by
/// `mount` and aborted on drop.
pub struct ClockController {
    rx: watch::Receiver<String>,
    task: JoinHandle<()>,
}

impl ClockController {
    pub fn mount(tick: Duration) -> Self {
        let (tx, rx) = watch::channel(format_clock(&Local::now()));

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            loop {
                interval.tick().await;
                let now = format_clock(&Local::now());
                // Only wake readers when the minute actually changes.
                tx.send_if_modified(|current| {
                    if *current == now {
                        return false;
                    }
                    *current = now;
                    true
                });
                if tx.is_closed() {
                    break;
                }
            }
        });

        tracing::debug!("Clock mounted with {:?} tick", tick);
        Self { rx, task }
    }

    pub fn current_time(&self) -> String {
        self.rx.borrow().clone()
    }
}

impl Drop for ClockController {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("Clock unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_clock_is_24_hour() {
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 15, 7, 59).unwrap();
        assert_eq!(format_clock(&t), "15:07");

        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let t = tz.with_ymd_and_hms(2024, 1, 2, 0, 3, 0).unwrap();
        assert_eq!(format_clock(&t), "00:03");
    }

    #[tokio::test]
    async fn test_mounted_clock_reports_time() {
        let clock = ClockController::mount(Duration::from_millis(10));
        let time = clock.current_time();
        assert_eq!(time.len(), 5);
        assert_eq!(&time[2..3], ":");
    }

    #[tokio::test]
    async fn test_drop_stops_ticking_task() {
        let clock = ClockController::mount(Duration::from_millis(10));
        let mut rx = clock.rx.clone();
        drop(clock);

        // Sender lives in the aborted task, so the channel closes.
        tokio::time::timeout(Duration::from_secs(1), async {
            while rx.changed().await.is_ok() {}
        })
        .await
        .unwrap();
    }
}
