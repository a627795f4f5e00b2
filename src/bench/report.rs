//! Benchmark report rendering
//!
//! Pure formatting over a finished report; rendering never mutates the
//! report and the same report always renders to the same text.

use crate::models::{BenchmarkReport, ModelOutcome};

/// Report output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text, one block per model
    Text,
    /// JSON format
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Markdown table
    Markdown,
    /// CSV format
    Csv,
}

impl ReportFormat {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Some(Self::Text),
            "json" => Some(Self::Json),
            "json-pretty" => Some(Self::JsonPretty),
            "markdown" | "md" => Some(Self::Markdown),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Report renderer
pub struct ReportRenderer;

impl ReportRenderer {
    /// Render a report in the requested format
    pub fn render(report: &BenchmarkReport, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => Self::render_text(report),
            ReportFormat::Json => serde_json::to_string(report).unwrap_or_default(),
            ReportFormat::JsonPretty => serde_json::to_string_pretty(report).unwrap_or_default(),
            ReportFormat::Markdown => Self::render_markdown(report),
            ReportFormat::Csv => Self::render_csv(report),
        }
    }

    fn render_text(report: &BenchmarkReport) -> String {
        let mut output = String::new();
        output.push_str("\n===== Benchmarking Results =====\n");

        for record in &report.records {
            output.push_str(&format!("Model: {}\n", record.model));
            match &record.outcome {
                ModelOutcome::Ok {
                    execution_seconds,
                    peak_memory_bytes,
                    summary,
                } => {
                    output.push_str(&format!(
                        "Execution Time: {execution_seconds:.4} seconds\n"
                    ));
                    output.push_str(&format!(
                        "Memory Usage: {:.2} MB\n",
                        megabytes(*peak_memory_bytes)
                    ));
                    output.push_str(&format!("Summary Output: {summary}\n"));
                }
                ModelOutcome::Failed { kind, message } => {
                    output.push_str(&format!("Status: FAILED ({})\n", kind.label()));
                    output.push_str(&format!("Error: {message}\n"));
                }
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "{} of {} models benchmarked successfully\n",
            report.successes(),
            report.len()
        ));
        output
    }

    fn render_markdown(report: &BenchmarkReport) -> String {
        let mut output = String::new();

        output.push_str("# Summarization Benchmark Results\n\n");
        output.push_str(&format!(
            "Generated {} | device: {} | length bounds: {}-{} | input: {} chars\n\n",
            report.created_at.to_rfc3339(),
            report.device,
            report.min_length,
            report.max_length,
            report.input_chars
        ));
        output.push_str("| Model | Execution Time (s) | Peak Memory (MB) | Summary |\n");
        output.push_str("|-------|--------------------|------------------|---------|\n");

        for record in &report.records {
            match &record.outcome {
                ModelOutcome::Ok {
                    execution_seconds,
                    peak_memory_bytes,
                    summary,
                } => {
                    output.push_str(&format!(
                        "| {} | {execution_seconds:.4} | {:.2} | {} |\n",
                        record.model,
                        megabytes(*peak_memory_bytes),
                        summary.replace('|', "\\|")
                    ));
                }
                ModelOutcome::Failed { kind, message } => {
                    output.push_str(&format!(
                        "| {} | - | - | FAILED ({}): {} |\n",
                        record.model,
                        kind.label(),
                        message.replace('|', "\\|")
                    ));
                }
            }
        }

        output
    }

    fn render_csv(report: &BenchmarkReport) -> String {
        let mut output = String::new();
        output.push_str("model,status,execution_seconds,peak_memory_mb,summary_or_error\n");

        for record in &report.records {
            match &record.outcome {
                ModelOutcome::Ok {
                    execution_seconds,
                    peak_memory_bytes,
                    summary,
                } => {
                    output.push_str(&format!(
                        "{},ok,{execution_seconds:.4},{:.2},\"{}\"\n",
                        record.model,
                        megabytes(*peak_memory_bytes),
                        summary.replace('"', "\"\"")
                    ));
                }
                ModelOutcome::Failed { kind, message } => {
                    output.push_str(&format!(
                        "{},failed,,,\"{}: {}\"\n",
                        record.model,
                        kind.label(),
                        message.replace('"', "\"\"")
                    ));
                }
            }
        }

        output
    }
}

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / 1_000_000.0
}
