// "HH:MM" label parsing
use chrono::{DateTime, Duration, NaiveTime, Offset, TimeZone};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeLabelError {
    #[error("time label must be a string such as \"14:30\", got {0}")]
    InvalidInputType(String),
    #[error("invalid time label \"{0}\", expected HH:MM such as \"09:05\"")]
    InvalidFormat(String),
}

/// Resolve an "HH:MM" (or "H:M") label to a timestamp in milliseconds on the
/// calendar date of `base`, in the time zone of `base`. Seconds and
/// milliseconds are zeroed.
pub fn parse_hhmm<Tz: TimeZone>(time_str: &str, base: &DateTime<Tz>) -> Result<i64, TimeLabelError> {
    let invalid = || TimeLabelError::InvalidFormat(time_str.to_string());

    let (h_str, m_str) = time_str.split_once(':').ok_or_else(invalid)?;
    if m_str.contains(':') {
        return Err(invalid());
    }

    let hours: u32 = h_str.trim().parse().map_err(|_| invalid())?;
    let minutes: u32 = m_str.trim().parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    let time = NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)?;
    let naive = base.date_naive().and_time(time);
    let tz = base.timezone();

    let resolved = match tz.from_local_datetime(&naive).earliest() {
        Some(dt) => dt,
        // Wall-clock time skipped by a DST transition: keep the offset of `base`.
        None => {
            let offset = base.offset().fix().local_minus_utc();
            tz.from_utc_datetime(&(naive - Duration::seconds(offset as i64)))
        }
    };

    Ok(resolved.timestamp_millis())
}

/// Parse a label taken straight from a JSON payload.
pub fn parse_label<Tz: TimeZone>(label: &Value, base: &DateTime<Tz>) -> Result<i64, TimeLabelError> {
    match label.as_str() {
        Some(s) => parse_hhmm(s, base),
        None => Err(TimeLabelError::InvalidInputType(label.to_string())),
    }
}
