//! Model catalog and device selection
//!
//! Defines the built-in summarization models being compared and the
//! compute-device selection passed through to the inference provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in summarization models
///
/// Any Hugging Face model id is accepted on the command line; these are the
/// three the tool benchmarks by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelInfo {
    /// Model identifier as the inference provider resolves it
    pub id: &'static str,
    /// Model family
    pub family: &'static str,
    /// Short description for `list --detailed`
    pub description: &'static str,
}

const CATALOG: &[ModelInfo] = &[
    ModelInfo {
        id: "google/pegasus-xsum",
        family: "Pegasus",
        description: "Pegasus fine-tuned on XSum, single-sentence abstractive summaries",
    },
    ModelInfo {
        id: "facebook/bart-large-cnn",
        family: "BART",
        description: "BART large fine-tuned on CNN/DailyMail, multi-sentence summaries",
    },
    ModelInfo {
        id: "sshleifer/distilbart-cnn-12-6",
        family: "DistilBART",
        description: "Distilled BART, 12 encoder / 6 decoder layers, faster inference",
    },
];

/// All catalog entries
pub fn catalog() -> &'static [ModelInfo] {
    CATALOG
}

/// Default model identifiers, in benchmark order
pub fn default_models() -> Vec<String> {
    CATALOG.iter().map(|m| m.id.to_string()).collect()
}

/// Compute-device selection
///
/// Passed opaquely to the inference provider; the provider decides what the
/// selection means for its backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Device {
    /// Use the default accelerator if one is available
    DefaultAccelerator,
    /// Force CPU execution
    Cpu,
    /// Explicit accelerator index
    Index(u32),
}

impl Device {
    /// Parse from a configuration string
    pub fn from_str(s: &str) -> Option<Device> {
        match s.to_lowercase().as_str() {
            "auto" | "default" | "default-accelerator" | "gpu" => Some(Device::DefaultAccelerator),
            "cpu" => Some(Device::Cpu),
            other => other.parse::<u32>().ok().map(Device::Index),
        }
    }
}

impl Default for Device {
    fn default() -> Self {
        Device::DefaultAccelerator
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::DefaultAccelerator => write!(f, "auto"),
            Device::Cpu => write!(f, "cpu"),
            Device::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<Device> for String {
    fn from(device: Device) -> Self {
        device.to_string()
    }
}

impl TryFrom<String> for Device {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Device::from_str(&value).ok_or_else(|| format!("invalid device: {value}"))
    }
}
