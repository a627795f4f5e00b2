//! Resource measurement module
//!
//! Scopes a timer and a memory-peak tracker to a single measured region.

mod proc;

pub use proc::ProcStatusMonitor;

use std::time::Duration;

use crate::error::BenchError;

/// Figures observed for one measured region
#[derive(Clone, Copy, Debug)]
pub struct ResourceUsage {
    /// Wall-clock time between start and stop
    pub elapsed: Duration,
    /// Memory in use when the region ended
    pub current_bytes: u64,
    /// Peak memory observed since the start baseline
    pub peak_bytes: u64,
}

/// Region-scoped resource monitor
///
/// `start` resets the peak baseline so consecutive regions never see each
/// other's peaks; `stop` yields the figures for the region just ended.
pub trait ResourceMonitor {
    fn start(&mut self) -> Result<(), BenchError>;
    fn stop(&mut self) -> Result<ResourceUsage, BenchError>;
}
