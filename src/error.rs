//! Benchmark error taxonomy
//!
//! Distinguishes model-loading, inference, and measurement failures so the
//! report can record what went wrong for each model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Benchmark errors
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("failed to load model '{model}': {message}")]
    EngineLoad { model: String, message: String },

    #[error("inference failed for model '{model}': {message}")]
    Inference { model: String, message: String },

    #[error("resource measurement failed: {message}")]
    Measurement { message: String },

    #[error("invalid request: {message}")]
    InvalidRequest { message: String },
}

impl BenchError {
    /// Build an engine-load error
    pub fn engine_load(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::EngineLoad {
            model: model.into(),
            message: message.into(),
        }
    }

    /// Build an inference error
    pub fn inference(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Inference {
            model: model.into(),
            message: message.into(),
        }
    }

    /// Build a measurement error
    pub fn measurement(message: impl Into<String>) -> Self {
        Self::Measurement {
            message: message.into(),
        }
    }

    /// Build an invalid-request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Failure kind recorded in report entries
    pub fn kind(&self) -> FailureKind {
        match self {
            BenchError::EngineLoad { .. } => FailureKind::EngineLoad,
            BenchError::Inference { .. } => FailureKind::Inference,
            BenchError::Measurement { .. } => FailureKind::Measurement,
            BenchError::InvalidRequest { .. } => FailureKind::InvalidRequest,
        }
    }
}

/// Failure classification for failed report entries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    EngineLoad,
    Inference,
    Measurement,
    InvalidRequest,
}

impl FailureKind {
    /// Short label used in rendered reports
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::EngineLoad => "engine load error",
            FailureKind::Inference => "inference error",
            FailureKind::Measurement => "measurement error",
            FailureKind::InvalidRequest => "invalid request",
        }
    }
}
