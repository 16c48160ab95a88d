// HTTP metric source - Fetches look-forward ratios from the metric backend
use crate::application::metric_source::{MetricSource, RawMetricPayload};
use crate::domain::error::PipelineError;
use async_trait::async_trait;
use std::time::Duration;

const LOOK_FORWARD_PATH: &str = "/look_forward_ratio";

#[derive(Debug, Clone)]
pub struct HttpMetricSource {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpMetricSource {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn build_url(&self) -> String {
        format!("{}{}", self.base_url, LOOK_FORWARD_PATH)
    }
}

#[async_trait]
impl MetricSource for HttpMetricSource {
    async fn fetch_payload(&self) -> Result<RawMetricPayload, PipelineError> {
        let url = self.build_url();
        tracing::debug!("Fetching metrics from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| PipelineError::NetworkFailure(format!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::NetworkFailure(format!(
                "metric backend returned {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PipelineError::NetworkFailure(format!("failed to read response body: {}", e)))?;

        serde_json::from_slice::<RawMetricPayload>(&bytes).map_err(|e| PipelineError::malformed(e.to_string()))
    }
}
