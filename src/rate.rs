// Throughput from cumulative counter deltas between two samples.

use crate::models::{Rates, Sample};

/// Bytes/sec between two consecutive samples, measured against the samples' own
/// wall-clock timestamps rather than the configured interval (tolerates scheduling
/// jitter). Counter wrap or reset clamps the delta to zero; a non-positive elapsed
/// time yields zero rates.
pub fn rates_between(prev: &Sample, curr: &Sample) -> Rates {
    let elapsed_secs = curr.timestamp.saturating_sub(prev.timestamp) as f64 / 1000.0;
    if elapsed_secs <= 0.0 {
        return Rates::default();
    }
    let sent = curr.bytes_sent.saturating_sub(prev.bytes_sent);
    let recv = curr.bytes_recv.saturating_sub(prev.bytes_recv);
    Rates {
        upload_bps: sent as f64 / elapsed_secs,
        download_bps: recv as f64 / elapsed_secs,
    }
}
