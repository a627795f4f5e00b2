//! Summarization request template
//!
//! One request template is shared across all models in a run so the
//! comparison stays fair: same text, same length bounds.

use serde::{Deserialize, Serialize};

use crate::error::BenchError;

/// Request template applied uniformly to every model
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummarizationRequest {
    /// Input text to summarize
    pub text: String,
    /// Maximum summary length (tokens)
    pub max_length: u32,
    /// Minimum summary length (tokens)
    pub min_length: u32,
    /// Batch size passed to the engine; a no-op for a single input
    pub batch_size: u32,
}

impl SummarizationRequest {
    /// Create a request with the default length bounds
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_length: 100,
            min_length: 25,
            batch_size: 1,
        }
    }

    /// Set length bounds
    pub fn with_lengths(mut self, min_length: u32, max_length: u32) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Set batch size
    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Check the request invariants
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.text.trim().is_empty() {
            return Err(BenchError::invalid_request("input text is empty"));
        }
        if self.min_length == 0 || self.max_length == 0 {
            return Err(BenchError::invalid_request(
                "length bounds must be positive",
            ));
        }
        if self.min_length > self.max_length {
            return Err(BenchError::invalid_request(format!(
                "min_length {} exceeds max_length {}",
                self.min_length, self.max_length
            )));
        }
        if self.batch_size == 0 {
            return Err(BenchError::invalid_request("batch_size must be at least 1"));
        }
        Ok(())
    }
}
