// Ping latency probe: system ping binary, one echo, bounded by a timeout.

use crate::errors::MetricError;
use std::process::Stdio;
use std::time::Duration;

/// Round-trip time in milliseconds to `host`, or an error when the probe times out,
/// cannot spawn, or produces no latency line. Callers report errors as unreachable
/// for the current tick; the probe never blocks longer than `timeout`.
pub async fn probe(host: &str, timeout: Duration) -> Result<f64, MetricError> {
    let mut cmd = tokio::process::Command::new("ping");
    #[cfg(windows)]
    cmd.args(["-n", "1", "-w", &timeout.as_millis().to_string()]);
    #[cfg(not(windows))]
    cmd.args(["-c", "1", "-W", &timeout.as_secs().max(1).to_string()]);
    cmd.arg(host)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .kill_on_drop(true);

    let output = tokio::time::timeout(timeout, cmd.output())
        .await
        .map_err(|_| MetricError::PingTimeout {
            host: host.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        })?
        .map_err(|e| MetricError::Unavailable(format!("ping spawn: {e}")))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_latency_ms(&stdout).ok_or_else(|| {
        MetricError::Unavailable(format!("no latency in ping output for {host}"))
    })
}

/// Extract the first `time=12.3 ms` (or `time<1ms`) value from ping output.
pub fn parse_latency_ms(output: &str) -> Option<f64> {
    let idx = output.find("time=").or_else(|| output.find("time<"))?;
    let rest = &output[idx + "time=".len()..];
    let digits: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}
