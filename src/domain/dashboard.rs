// Dashboard domain model
use super::telemetry::{Coordinate, HourGroup};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptive metadata about the session being charted. Extra fields sent by
/// the backend are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub classroom: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for BasicInfo {
    fn default() -> Self {
        Self {
            course_name: "Interdisciplinary Capstone Project".to_string(),
            classroom: "Room 208".to_string(),
            instructor: "Prof. Wu".to_string(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartInfo {
    pub title: String,
    pub label: String,
    pub x_max_ticks: u32,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub title: String,
    pub chart: ChartInfo,
    pub basic_info: BasicInfo,
    pub points: Vec<Coordinate>,
    pub hourly: Vec<HourGroup>,
}

impl Dashboard {
    pub fn new(
        title: String,
        chart: ChartInfo,
        basic_info: BasicInfo,
        points: Vec<Coordinate>,
        hourly: Vec<HourGroup>,
    ) -> Self {
        Self {
            title,
            chart,
            basic_info,
            points,
            hourly,
        }
    }
}
