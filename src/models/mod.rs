//! Data models for summarization benchmarking
//!
//! This module contains all data structures used throughout the application.

mod model;
mod request;
mod result;

pub use model::{catalog, default_models, Device, ModelInfo};
pub use request::SummarizationRequest;
pub use result::{BenchmarkReport, ModelOutcome, ModelRecord};
