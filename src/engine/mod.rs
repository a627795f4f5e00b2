//! Summarization engine module
//!
//! The benchmark runner consumes inference through these two traits only;
//! how an engine loads weights, tokenizes, or batches is the provider's
//! concern.

mod http;

pub use http::{HttpEngine, HttpEngineProvider, DEFAULT_ENDPOINT};

use crate::error::BenchError;
use crate::models::{Device, SummarizationRequest};

/// A loaded engine bound to one model
#[allow(async_fn_in_trait)]
pub trait SummarizationEngine {
    /// Run one summarization call, returning candidate summaries in rank
    /// order. This is the operation the benchmark measures.
    async fn summarize(&self, request: &SummarizationRequest) -> Result<Vec<String>, BenchError>;
}

/// Acquires engines by model identifier
#[allow(async_fn_in_trait)]
pub trait EngineProvider {
    type Engine: SummarizationEngine;

    /// Resolve and load a model. Expensive and fallible; kept outside the
    /// measured window.
    async fn load(&self, model: &str, device: Device) -> Result<Self::Engine, BenchError>;
}
