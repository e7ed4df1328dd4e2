// Per-tick sample, derived throughput, and the exceeded-metric enum

use serde::{Deserialize, Serialize};

/// One instantaneous reading of the host. Produced by a `MetricSource`, owned by the
/// sampling loop for one tick, then cloned out to the presenter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Wall-clock time of the reading, milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub cpu_percent: f64,
    pub mem_percent: f64,
    /// Highest usage across mounted partitions, 0..=100.
    pub disk_percent: f64,
    /// Cumulative bytes transmitted across non-loopback interfaces (monotonic counter).
    pub bytes_sent: u64,
    /// Cumulative bytes received across non-loopback interfaces (monotonic counter).
    pub bytes_recv: u64,
    /// Round-trip latency to the configured ping host; `None` means unreachable
    /// (timed out, no route, or the probe could not run this tick).
    pub ping_ms: Option<f64>,
}

/// Throughput derived from two consecutive samples. Zero on the first tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rates {
    pub upload_bps: f64,
    pub download_bps: f64,
}

/// A metric that can cross its configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Cpu,
    Memory,
    Disk,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Cpu => write!(f, "CPU"),
            Metric::Memory => write!(f, "memory"),
            Metric::Disk => write!(f, "disk"),
        }
    }
}
