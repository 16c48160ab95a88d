// Example data - Synthetic series for running without a live backend
use crate::application::metric_source::{MetricSource, RawMetricPayload};
use crate::domain::error::PipelineError;
use crate::domain::telemetry::{round_to, Coordinate};
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use serde_json::Value;

const WALK_START: f64 = 50.0;
const WALK_STEP: f64 = 7.5;
const WALK_MIN: f64 = 10.0;
const WALK_MAX: f64 = 90.0;

const PRESET_VALUES: [f64; 6] = [40.0, 55.0, 60.0, 75.0, 90.0, 80.0];
const PRESET_INTERVAL_MS: i64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleVariant {
    RandomWalk,
    Sinusoidal,
    Preset,
}

/// Random walk starting at 50, clamped to [10, 90], two decimals.
pub fn random_walk<R: Rng>(rng: &mut R, count: usize, interval_ms: i64, now_ms: i64) -> Vec<Coordinate> {
    let mut current = WALK_START;
    (0..count)
        .rev()
        .map(|i| {
            current = (current + rng.random_range(-WALK_STEP..=WALK_STEP)).clamp(WALK_MIN, WALK_MAX);
            Coordinate::new((now_ms - i as i64 * interval_ms) as f64, round_to(current, 2))
        })
        .collect()
}

/// `40 + 30 * sin(i / 2)` plus up to 5 of noise, `i` counting back from now.
pub fn sinusoidal<R: Rng>(rng: &mut R, count: usize, interval_ms: i64, now_ms: i64) -> Vec<Coordinate> {
    (0..count)
        .rev()
        .map(|i| {
            let y = 40.0 + 30.0 * (i as f64 / 2.0).sin() + rng.random_range(0.0..5.0);
            Coordinate::new((now_ms - i as i64 * interval_ms) as f64, y)
        })
        .collect()
}

/// Fixed six-point demo series ending at `now_ms`.
pub fn preset(now_ms: i64) -> Vec<Coordinate> {
    let last = PRESET_VALUES.len() as i64 - 1;
    PRESET_VALUES
        .iter()
        .enumerate()
        .map(|(idx, &y)| Coordinate::new((now_ms - (last - idx as i64) * PRESET_INTERVAL_MS) as f64, y))
        .collect()
}

pub fn generate_series<R: Rng>(
    variant: ExampleVariant,
    rng: &mut R,
    count: usize,
    interval_ms: i64,
    now_ms: i64,
) -> Vec<Coordinate> {
    match variant {
        ExampleVariant::RandomWalk => random_walk(rng, count, interval_ms, now_ms),
        ExampleVariant::Sinusoidal => sinusoidal(rng, count, interval_ms, now_ms),
        ExampleVariant::Preset => preset(now_ms),
    }
}

/// Stands in for the live backend, emitting payloads with explicit timestamps.
#[derive(Debug, Clone)]
pub struct ExampleMetricSource {
    variant: ExampleVariant,
    count: usize,
    interval_ms: i64,
}

impl ExampleMetricSource {
    pub fn new(variant: ExampleVariant, count: usize, interval_ms: i64) -> Self {
        Self {
            variant,
            count,
            interval_ms,
        }
    }

    pub fn payload_from(points: &[Coordinate]) -> RawMetricPayload {
        RawMetricPayload {
            look_forward_percentages: points.iter().map(|p| Value::from(p.y)).collect(),
            timestamps: Some(points.iter().map(|p| p.x).collect()),
            labels: None,
            basic_info: None,
        }
    }
}

#[async_trait]
impl MetricSource for ExampleMetricSource {
    async fn fetch_payload(&self) -> Result<RawMetricPayload, PipelineError> {
        let now_ms = Utc::now().timestamp_millis();
        let points = generate_series(self.variant, &mut rand::rng(), self.count, self.interval_ms, now_ms);
        tracing::debug!("Generated {} example points ({:?})", points.len(), self.variant);
        Ok(Self::payload_from(&points))
    }
}
