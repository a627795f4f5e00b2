//! Process-memory monitor backed by procfs
//!
//! On Linux the kernel keeps a resident-set high-water mark (`VmHWM`) that
//! can be reset by writing `5` to `/proc/self/clear_refs`, which gives a
//! true peak figure for the window between start and stop without a
//! sampling thread. On other platforms the memory figures fall back to
//! zero so the crate still compiles everywhere; timing stays valid.

use std::time::Instant;

use crate::error::BenchError;

use super::{ResourceMonitor, ResourceUsage};

/// Peak-RSS monitor for the current process
#[derive(Debug, Default)]
pub struct ProcStatusMonitor {
    started: Option<Instant>,
}

impl ProcStatusMonitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResourceMonitor for ProcStatusMonitor {
    fn start(&mut self) -> Result<(), BenchError> {
        reset_peak_rss()?;
        self.started = Some(Instant::now());
        Ok(())
    }

    fn stop(&mut self) -> Result<ResourceUsage, BenchError> {
        let started = self
            .started
            .take()
            .ok_or_else(|| BenchError::measurement("monitor stopped without a start"))?;
        let elapsed = started.elapsed();
        let (current_bytes, peak_bytes) = read_memory()?;

        Ok(ResourceUsage {
            elapsed,
            current_bytes,
            peak_bytes,
        })
    }
}

#[cfg(target_os = "linux")]
fn reset_peak_rss() -> Result<(), BenchError> {
    std::fs::write("/proc/self/clear_refs", "5")
        .map_err(|e| BenchError::measurement(format!("failed to reset peak RSS: {e}")))
}

/// Read (VmRSS, VmHWM) in bytes from `/proc/self/status`
#[cfg(target_os = "linux")]
fn read_memory() -> Result<(u64, u64), BenchError> {
    let status = std::fs::read_to_string("/proc/self/status")
        .map_err(|e| BenchError::measurement(format!("failed to read /proc/self/status: {e}")))?;

    let mut rss = None;
    let mut hwm = None;
    for line in status.lines() {
        if let Some(rest) = line.strip_prefix("VmRSS:") {
            rss = parse_kb(rest);
        } else if let Some(rest) = line.strip_prefix("VmHWM:") {
            hwm = parse_kb(rest);
        }
    }

    match (rss, hwm) {
        (Some(rss), Some(hwm)) => Ok((rss, hwm)),
        _ => Err(BenchError::measurement(
            "VmRSS/VmHWM missing from /proc/self/status",
        )),
    }
}

#[cfg(target_os = "linux")]
fn parse_kb(rest: &str) -> Option<u64> {
    let trimmed = rest.trim().trim_end_matches("kB").trim();
    trimmed.parse::<u64>().ok().map(|kb| kb * 1024)
}

#[cfg(not(target_os = "linux"))]
fn reset_peak_rss() -> Result<(), BenchError> {
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn read_memory() -> Result<(u64, u64), BenchError> {
    Ok((0, 0))
}
