// Alert delivery: capability trait with desktop and console transports, plus the
// sink that enforces the per-metric re-notification interval.

use crate::errors::NotifyError;
use crate::models::{Metric, Rates, Sample};
use std::collections::HashMap;
use std::process::Stdio;
use std::time::{Duration, Instant};

/// Capability to show a short title+message alert to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError>;
}

/// Desktop toast via `notify-send`, spawned fire-and-forget so a stuck notification
/// daemon cannot stall the sampling loop.
pub struct DesktopNotifier {
    command: String,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self::with_command("notify-send")
    }

    /// Override the toast binary (tests substitute a stub command here).
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        let mut child = std::process::Command::new(&self.command)
            .arg(title)
            .arg(body)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| NotifyError(format!("{}: {e}", self.command)))?;
        // Reap the child off-thread so finished toasts do not linger as zombies.
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

/// Console transport: a warn-level log line. Also the sink's built-in fallback.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        tracing::warn!(alert = %title, "{}", body.replace('\n', "; "));
        Ok(())
    }
}

/// Per-metric notification timestamps. Created empty at startup, mutated only by the
/// sink after a delivery (or its fallback) is confirmed dispatched. Process lifetime.
#[derive(Debug, Default)]
pub struct AlertState {
    last_notified: HashMap<Metric, Instant>,
}

impl AlertState {
    pub fn last_notified(&self, metric: Metric) -> Option<Instant> {
        self.last_notified.get(&metric).copied()
    }
}

/// Decides whether each exceeded metric is due for a notification and delivers it.
/// Delivery failure falls back to the console and is never surfaced to the caller.
pub struct NotificationSink {
    transport: Box<dyn Notifier>,
    fallback: Box<dyn Notifier>,
    notify_interval: Duration,
    state: AlertState,
}

impl NotificationSink {
    pub fn new(transport: Box<dyn Notifier>, notify_interval: Duration) -> Self {
        Self {
            transport,
            fallback: Box::new(ConsoleNotifier),
            notify_interval,
            state: AlertState::default(),
        }
    }

    /// Replace the console fallback (tests inject a recorder here).
    pub fn with_fallback(mut self, fallback: Box<dyn Notifier>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn state(&self) -> &AlertState {
        &self.state
    }

    /// For each exceeded metric: deliver a notification unless one was already sent
    /// within the re-notification interval. `now` is explicit so tests can drive a
    /// deterministic timeline. Crossing, clearing, and re-crossing inside the window
    /// does not reset the timer.
    pub fn maybe_notify(&mut self, exceeded: &[Metric], sample: &Sample, rates: &Rates, now: Instant) {
        for &metric in exceeded {
            let due = match self.state.last_notified.get(&metric) {
                None => true,
                Some(last) => now.duration_since(*last) >= self.notify_interval,
            };
            if !due {
                tracing::debug!(metric = %metric, "alert suppressed: notify interval not elapsed");
                continue;
            }

            let (title, body) = format_alert(metric, sample, rates);
            let dispatched = match self.transport.notify(&title, &body) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, metric = %metric, "notification failed; using console fallback");
                    self.fallback.notify(&title, &body).is_ok()
                }
            };
            if dispatched {
                self.state.last_notified.insert(metric, now);
                tracing::info!(metric = %metric, "notification shown: {title}");
            }
        }
    }
}

/// Title and multi-line body for an alert, carrying the current readings alongside
/// the offending metric.
fn format_alert(metric: Metric, sample: &Sample, rates: &Rates) -> (String, String) {
    let value = match metric {
        Metric::Cpu => sample.cpu_percent,
        Metric::Memory => sample.mem_percent,
        Metric::Disk => sample.disk_percent,
    };
    let title = format!("Resource alert: {metric} {value:.1}%");
    let ping = match sample.ping_ms {
        Some(ms) => format!("{ms:.0} ms"),
        None => "unreachable".into(),
    };
    let body = format!(
        "CPU: {:.1}%\nMemory: {:.1}%\nDisk: {:.1}%\nUpload: {:.2} KB/s\nDownload: {:.2} KB/s\nPing: {}",
        sample.cpu_percent,
        sample.mem_percent,
        sample.disk_percent,
        rates.upload_bps / 1024.0,
        rates.download_bps / 1024.0,
        ping,
    );
    (title, body)
}
