// Source trait for raw look-forward metric payloads
use crate::domain::dashboard::BasicInfo;
use crate::domain::error::PipelineError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /look_forward_ratio`. Values may be numbers or numeric
/// strings; at most one time axis is expected to be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMetricPayload {
    pub look_forward_percentages: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Value>>,
    #[serde(default, rename = "basicInfo", skip_serializing_if = "Option::is_none")]
    pub basic_info: Option<BasicInfo>,
}

/// Which time axis a payload carries, in resolution priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeAxis<'a> {
    Timestamps(&'a [f64]),
    Labels(&'a [Value]),
    Synthesized,
}

impl RawMetricPayload {
    pub fn time_axis(&self) -> TimeAxis<'_> {
        match (&self.timestamps, &self.labels) {
            (Some(ts), _) => TimeAxis::Timestamps(ts),
            (None, Some(labels)) => TimeAxis::Labels(labels),
            (None, None) => TimeAxis::Synthesized,
        }
    }
}

#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Fetch the current look-forward ratio payload
    async fn fetch_payload(&self) -> Result<RawMetricPayload, PipelineError>;
}
