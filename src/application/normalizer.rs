// Payload normalizer - Raw metric payloads to canonical chart coordinates
use crate::application::metric_source::{RawMetricPayload, TimeAxis};
use crate::domain::dashboard::BasicInfo;
use crate::domain::error::PipelineError;
use crate::domain::telemetry::{round_to, Coordinate};
use crate::domain::time_label::parse_label;
use chrono::{DateTime, TimeZone};
use serde_json::Value;

/// Spacing assumed between samples when the payload carries no time axis.
pub const SYNTHETIC_INTERVAL_MS: f64 = 1000.0;
const VALUE_PLACES: i32 = 3;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedSeries {
    pub points: Vec<Coordinate>,
    pub basic_info: Option<BasicInfo>,
}

/// Convert a raw payload into an ordered coordinate sequence. `now` anchors
/// synthesized timestamps and supplies the date for "HH:MM" labels.
pub fn normalize<Tz: TimeZone>(
    payload: RawMetricPayload,
    now: &DateTime<Tz>,
) -> Result<NormalizedSeries, PipelineError> {
    let values = payload
        .look_forward_percentages
        .iter()
        .enumerate()
        .map(|(idx, v)| coerce_value(v).map_err(|e| PipelineError::malformed(format!("value {idx}: {e}"))))
        .collect::<Result<Vec<f64>, _>>()?;

    let timestamps = match payload.time_axis() {
        TimeAxis::Timestamps(ts) => {
            check_len("timestamps", ts.len(), values.len())?;
            ts.to_vec()
        }
        TimeAxis::Labels(labels) => {
            check_len("labels", labels.len(), values.len())?;
            labels
                .iter()
                .map(|label| parse_label(label, now).map(|ts| ts as f64))
                .collect::<Result<Vec<f64>, _>>()?
        }
        TimeAxis::Synthesized => {
            let now_ms = now.timestamp_millis() as f64;
            let last = values.len().saturating_sub(1);
            (0..values.len())
                .map(|idx| now_ms - (last - idx) as f64 * SYNTHETIC_INTERVAL_MS)
                .collect()
        }
    };

    let mut points: Vec<Coordinate> = timestamps
        .into_iter()
        .zip(values)
        .map(|(x, y)| Coordinate::new(x, y))
        .collect();
    // Stable: equal timestamps keep payload order.
    points.sort_by(|a, b| a.x.total_cmp(&b.x));

    Ok(NormalizedSeries {
        points,
        basic_info: payload.basic_info,
    })
}

/// Fetch-and-normalize boundary: failures are logged and collapse to an
/// empty series.
pub fn normalize_or_empty<Tz: TimeZone>(
    fetched: Result<RawMetricPayload, PipelineError>,
    now: &DateTime<Tz>,
) -> NormalizedSeries {
    match fetched.and_then(|payload| normalize(payload, now)) {
        Ok(series) => {
            tracing::debug!("Normalized {} points", series.points.len());
            series
        }
        Err(e) => {
            tracing::error!("Falling back to empty chart data: {}", e);
            NormalizedSeries::default()
        }
    }
}

fn coerce_value(value: &Value) -> Result<f64, String> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(round_to(v, VALUE_PLACES)),
        _ => Err(format!("{} is not a number", value)),
    }
}

fn check_len(axis: &str, axis_len: usize, values_len: usize) -> Result<(), PipelineError> {
    if axis_len != values_len {
        return Err(PipelineError::malformed(format!(
            "{} values but {} {}",
            values_len, axis_len, axis
        )));
    }
    Ok(())
}
