//! Benchmark execution and reporting module
//!
//! Provides the sequential per-model measurement loop and the report
//! renderer.

mod report;
mod runner;

pub use report::{ReportFormat, ReportRenderer};
pub use runner::BenchmarkRunner;
