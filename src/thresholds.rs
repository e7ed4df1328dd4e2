// Threshold evaluation: pure function of the current sample and config.
// Whether to notify is the sink's decision, not this module's.

use crate::config::MonitorConfig;
use crate::models::{Metric, Sample};

/// Returns the metrics whose sampled value is strictly greater than the configured
/// threshold. Exactly-equal does not trigger. Disk participates only when a disk
/// threshold is configured.
pub fn evaluate(sample: &Sample, config: &MonitorConfig) -> Vec<Metric> {
    let mut exceeded = Vec::new();
    if sample.cpu_percent > config.cpu_threshold_pct {
        exceeded.push(Metric::Cpu);
    }
    if sample.mem_percent > config.mem_threshold_pct {
        exceeded.push(Metric::Memory);
    }
    if let Some(disk_thr) = config.disk_threshold_pct
        && sample.disk_percent > disk_thr
    {
        exceeded.push(Metric::Disk);
    }
    exceeded
}
