// Shared test helpers: sample/config builders and recording fakes

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use sysmon::config::MonitorConfig;
use sysmon::errors::NotifyError;
use sysmon::models::{Sample, TickUpdate};
use sysmon::notify::Notifier;
use sysmon::presenter::Presenter;

pub fn sample_at(timestamp: u64, cpu_percent: f64, mem_percent: f64) -> Sample {
    Sample {
        timestamp,
        cpu_percent,
        mem_percent,
        disk_percent: 0.0,
        bytes_sent: 0,
        bytes_recv: 0,
        ping_ms: Some(10.0),
    }
}

pub fn config(cpu_thr: f64, mem_thr: f64, notify_interval_sec: u64) -> MonitorConfig {
    MonitorConfig {
        sample_interval_sec: 1,
        cpu_threshold_pct: cpu_thr,
        mem_threshold_pct: mem_thr,
        disk_threshold_pct: None,
        notify_interval_sec,
        ping_host: "127.0.0.1".into(),
        failure_budget: 3,
    }
}

/// Notifier that records every delivered (title, body) pair.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn titles(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|(t, _)| t.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}

/// Notifier whose transport is always unavailable.
pub struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn notify(&self, _title: &str, _body: &str) -> Result<(), NotifyError> {
        Err(NotifyError("toast transport unavailable".into()))
    }
}

/// Presenter that records every tick handed to it.
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    pub updates: Arc<Mutex<Vec<TickUpdate>>>,
}

impl RecordingPresenter {
    pub fn count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, update: TickUpdate) {
        self.updates.lock().unwrap().push(update);
    }
}
