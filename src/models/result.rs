//! Benchmark result models
//!
//! One record per model per run. Records are immutable once created and the
//! report keeps them in the order the models were processed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BenchError, FailureKind};
use crate::models::Device;

/// Outcome of benchmarking a single model
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ModelOutcome {
    /// The inference call completed and was measured
    Ok {
        /// Wall-clock seconds for the summarization call only
        execution_seconds: f64,
        /// Peak host-process memory observed during the call
        peak_memory_bytes: u64,
        /// First candidate summary returned by the engine
        summary: String,
    },
    /// The model could not be benchmarked
    Failed {
        kind: FailureKind,
        message: String,
    },
}

/// Per-model benchmark record
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Model identifier
    pub model: String,
    #[serde(flatten)]
    pub outcome: ModelOutcome,
}

impl ModelRecord {
    /// Record a successful measurement
    pub fn success(
        model: impl Into<String>,
        execution_seconds: f64,
        peak_memory_bytes: u64,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            outcome: ModelOutcome::Ok {
                execution_seconds,
                peak_memory_bytes,
                summary: summary.into(),
            },
        }
    }

    /// Record a per-model failure
    pub fn failure(model: impl Into<String>, error: &BenchError) -> Self {
        Self {
            model: model.into(),
            outcome: ModelOutcome::Failed {
                kind: error.kind(),
                message: error.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ModelOutcome::Ok { .. })
    }
}

impl fmt::Display for ModelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ModelOutcome::Ok {
                execution_seconds,
                peak_memory_bytes,
                ..
            } => write!(
                f,
                "✓ {} [{execution_seconds:.4}s, {:.2} MB]",
                self.model,
                *peak_memory_bytes as f64 / 1_000_000.0
            ),
            ModelOutcome::Failed { kind, message } => {
                write!(f, "✗ {} [{}] - {message}", self.model, kind.label())
            }
        }
    }
}

/// Ordered collection of per-model records for one run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// When the run started
    pub created_at: DateTime<Utc>,
    /// Device selection passed to the provider
    pub device: Device,
    /// Length bounds shared by all models
    pub max_length: u32,
    pub min_length: u32,
    /// Input size, for context when reading summaries
    pub input_chars: usize,
    /// Records in the order models were processed
    pub records: Vec<ModelRecord>,
}

impl BenchmarkReport {
    pub fn new(device: Device, max_length: u32, min_length: u32, input_chars: usize) -> Self {
        Self {
            created_at: Utc::now(),
            device,
            max_length,
            min_length,
            input_chars,
            records: Vec::new(),
        }
    }

    /// Append a record, preserving processing order
    pub fn push(&mut self, record: ModelRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count of successfully measured models
    pub fn successes(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }

    /// Count of failed models
    pub fn failures(&self) -> usize {
        self.records.len() - self.successes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = ModelRecord::success("model-a", 1.5, 12_000_000, "a summary");
        assert!(record.is_success());

        let err = BenchError::engine_load("model-b", "not found");
        let record = ModelRecord::failure("model-b", &err);
        assert!(!record.is_success());
        match record.outcome {
            ModelOutcome::Failed { kind, .. } => assert_eq!(kind, FailureKind::EngineLoad),
            _ => panic!("expected failed outcome"),
        }
    }

    #[test]
    fn test_report_counts_and_order() {
        let mut report = BenchmarkReport::new(Device::Cpu, 100, 25, 500);
        report.push(ModelRecord::success("first", 1.0, 1_000, "s"));
        report.push(ModelRecord::failure(
            "second",
            &BenchError::inference("second", "boom"),
        ));

        assert_eq!(report.len(), 2);
        assert_eq!(report.successes(), 1);
        assert_eq!(report.failures(), 1);
        assert_eq!(report.records[0].model, "first");
        assert_eq!(report.records[1].model, "second");
    }

    #[test]
    fn test_record_serde_tagging() {
        let record = ModelRecord::success("m", 0.5, 8_000_000, "text");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"status\":\"ok\""));

        let back: ModelRecord = serde_json::from_str(&json).unwrap();
        assert!(back.is_success());
    }

    #[test]
    fn test_record_display() {
        let record = ModelRecord::success("m", 1.2345, 12_000_000, "text");
        let line = record.to_string();
        assert!(line.contains("1.2345"));
        assert!(line.contains("12.00 MB"));
    }
}
