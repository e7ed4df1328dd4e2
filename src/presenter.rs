// Per-tick front-ends: headless console output and the latest-wins channel the GUI
// window reads from.

use crate::models::TickUpdate;
use chrono::TimeZone;
use tokio::sync::watch;

/// Sink for one tick's result. The core makes no assumption about rendering.
pub trait Presenter: Send {
    fn present(&mut self, update: TickUpdate);
}

/// Headless front-end: one line per tick on stdout (human or JSON). This is product
/// output, not logging, so it bypasses tracing.
pub struct ConsolePresenter {
    json: bool,
}

impl ConsolePresenter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// The line printed for one tick; `None` when JSON serialization fails (logged,
    /// the tick is skipped rather than emitting a broken line).
    pub fn line(&self, update: &TickUpdate) -> Option<String> {
        if self.json {
            match serde_json::to_string(update) {
                Ok(line) => Some(line),
                Err(e) => {
                    tracing::warn!(error = %e, "tick serialization failed");
                    None
                }
            }
        } else {
            Some(Self::human_line(update))
        }
    }

    fn human_line(update: &TickUpdate) -> String {
        let ts = chrono::Local
            .timestamp_millis_opt(update.sample.timestamp as i64)
            .single()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| update.sample.timestamp.to_string());
        let ping = match update.sample.ping_ms {
            Some(ms) => format!("{ms:.0} ms"),
            None => "unreachable".into(),
        };
        let mut line = format!(
            "{ts} | CPU {:.1}% | Mem {:.1}% | Disk {:.1}% | Up {:.2} KB/s | Down {:.2} KB/s | Ping {}",
            update.sample.cpu_percent,
            update.sample.mem_percent,
            update.sample.disk_percent,
            update.rates.upload_bps / 1024.0,
            update.rates.download_bps / 1024.0,
            ping,
        );
        if !update.exceeded.is_empty() {
            let names: Vec<String> = update.exceeded.iter().map(|m| m.to_string()).collect();
            line.push_str(&format!(" [ALERT: {}]", names.join(", ")));
        }
        line
    }
}

impl Presenter for ConsolePresenter {
    fn present(&mut self, update: TickUpdate) {
        if let Some(line) = self.line(&update) {
            println!("{line}");
        }
    }
}

/// Hands ticks to another execution context (the GUI) through a watch channel:
/// ordered, latest-wins, never blocking the sampling loop. A renderer that cannot
/// keep up simply observes the newest tick and skips the overwritten ones.
pub struct ChannelPresenter {
    tx: watch::Sender<Option<TickUpdate>>,
}

impl ChannelPresenter {
    pub fn new() -> (Self, watch::Receiver<Option<TickUpdate>>) {
        let (tx, rx) = watch::channel(None);
        (Self { tx }, rx)
    }
}

impl Presenter for ChannelPresenter {
    fn present(&mut self, update: TickUpdate) {
        // send only fails when the receiver is gone; the loop keeps sampling either way
        let _ = self.tx.send(Some(update));
    }
}
