// Telemetry data domain models
use serde::Serialize;

pub const HOUR_MS: i64 = 60 * 60 * 1000;

/// A single chart sample: `x` is a timestamp in milliseconds since the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Start of the hour bucket this point falls into.
    pub fn hour_start(&self) -> i64 {
        let hour = HOUR_MS as f64;
        ((self.x / hour).floor() * hour) as i64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourGroup {
    pub hour_start: i64,
    pub points: Vec<Coordinate>,
}

impl HourGroup {
    pub fn new(hour_start: i64, points: Vec<Coordinate>) -> Self {
        Self { hour_start, points }
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
