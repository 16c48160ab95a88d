// Failures of the fetch / normalize pipeline
use super::time_label::TimeLabelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("metric backend unreachable: {0}")]
    NetworkFailure(String),
    #[error("malformed metric payload: {0}")]
    MalformedPayload(String),
    #[error(transparent)]
    InvalidTimeFormat(#[from] TimeLabelError),
}

impl PipelineError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedPayload(msg.into())
    }
}
