// Error taxonomy: per-tick errors are absorbed locally, only repeated total
// sampling failure terminates the process.

use thiserror::Error;

/// Failure to produce a sample (or part of one) this tick.
#[derive(Debug, Error)]
pub enum MetricError {
    /// The OS denied or failed every counter read; no sample could be produced.
    /// Counts against the sampling loop's failure budget.
    #[error("metrics unavailable: {0}")]
    Unavailable(String),

    /// The ping probe exceeded its bound. Reported as unreachable for this tick only.
    #[error("ping to {host} timed out after {timeout_ms} ms")]
    PingTimeout { host: String, timeout_ms: u64 },
}

/// Failure to deliver a notification via the configured transport. Never surfaced
/// past the sink; the sink falls back to the console.
#[derive(Debug, Error)]
#[error("notification delivery failed: {0}")]
pub struct NotifyError(pub String);

/// Terminal sampling-loop failure.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("sampling exhausted after {failures} consecutive failures, last: {last_error}")]
    SamplingExhausted { failures: u32, last_error: String },
}
