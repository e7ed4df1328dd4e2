// Host metrics via sysinfo

pub mod ping;

use crate::errors::MetricError;
use crate::models::Sample;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use sysinfo::{Disks, Networks, System};
use tracing::instrument;

/// Capability the sampling loop consumes: one instantaneous reading per call.
/// `Err` means no sample at all could be produced this tick; partial failures are
/// absorbed inside the implementation with sentinel values (0, unreachable).
#[async_trait]
pub trait MetricSource: Send + Sync {
    async fn sample(&self) -> Result<Sample, MetricError>;
}

/// Metric source backed by the sysinfo crate plus a bounded ping probe.
pub struct SysinfoSource {
    sys: Arc<std::sync::Mutex<System>>,
    disks: Arc<std::sync::Mutex<Disks>>,
    networks: Arc<std::sync::Mutex<Networks>>,
    last_cpu_refresh: Arc<std::sync::Mutex<Option<(Instant, f64)>>>,
    ping_host: String,
    ping_timeout: Duration,
}

/// Counter readings taken under the sysinfo locks, before the ping result joins.
struct CounterReadings {
    cpu_percent: f64,
    mem_percent: f64,
    disk_percent: f64,
    bytes_sent: u64,
    bytes_recv: u64,
}

impl SysinfoSource {
    pub fn new(ping_host: impl Into<String>, ping_timeout: Duration) -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        let disks = Disks::new_with_refreshed_list();
        let networks = Networks::new_with_refreshed_list();
        Self {
            sys: Arc::new(std::sync::Mutex::new(sys)),
            disks: Arc::new(std::sync::Mutex::new(disks)),
            networks: Arc::new(std::sync::Mutex::new(networks)),
            last_cpu_refresh: Arc::new(std::sync::Mutex::new(None)),
            ping_host: ping_host.into(),
            ping_timeout,
        }
    }

    fn read_counters(
        sys: &Arc<std::sync::Mutex<System>>,
        disks: &Arc<std::sync::Mutex<Disks>>,
        networks: &Arc<std::sync::Mutex<Networks>>,
        last_cpu_refresh: &Arc<std::sync::Mutex<Option<(Instant, f64)>>>,
    ) -> Result<CounterReadings, MetricError> {
        let mut sys = sys
            .lock()
            .map_err(|e| MetricError::Unavailable(format!("sysinfo lock poisoned: {e}")))?;

        // CPU usage needs MINIMUM_CPU_UPDATE_INTERVAL between refreshes to be
        // meaningful; cache the last reading for closer calls. The first call
        // establishes the baseline and reports 0.0.
        let now = Instant::now();
        let cpu_percent = if let Ok(mut guard) = last_cpu_refresh.lock() {
            if let Some((prev_ts, prev_usage)) = *guard {
                if now.duration_since(prev_ts) >= sysinfo::MINIMUM_CPU_UPDATE_INTERVAL {
                    sys.refresh_cpu_all();
                    let usage = sys.global_cpu_usage() as f64;
                    *guard = Some((now, usage));
                    usage
                } else {
                    prev_usage
                }
            } else {
                sys.refresh_cpu_all();
                *guard = Some((now, 0.0));
                0.0
            }
        } else {
            sys.refresh_cpu_all();
            0.0
        };

        sys.refresh_memory();
        let total_mem = sys.total_memory();
        let used_mem = total_mem.saturating_sub(sys.available_memory());
        let mem_percent = if total_mem > 0 {
            (used_mem as f64 / total_mem as f64) * 100.0
        } else {
            tracing::warn!(operation = "read_memory", "total memory reported as 0");
            0.0
        };
        drop(sys);

        let disk_percent = {
            let mut disks_guard = disks
                .lock()
                .map_err(|e| MetricError::Unavailable(format!("disks lock poisoned: {e}")))?;
            disks_guard.refresh(false);
            let max_usage = disks_guard
                .list()
                .iter()
                .filter(|d| d.total_space() > 0)
                .map(|d| {
                    let used = d.total_space().saturating_sub(d.available_space());
                    (used as f64 / d.total_space() as f64) * 100.0
                })
                .fold(None::<f64>, |acc, pct| Some(acc.map_or(pct, |m| m.max(pct))));
            match max_usage {
                Some(pct) => pct,
                None => {
                    tracing::debug!(operation = "read_disks", "no readable partitions");
                    0.0
                }
            }
        };

        let (bytes_sent, bytes_recv) = {
            let mut networks_guard = networks
                .lock()
                .map_err(|e| MetricError::Unavailable(format!("networks lock poisoned: {e}")))?;
            networks_guard.refresh(true);
            networks_guard
                .list()
                .iter()
                .filter(|(name, _)| !is_loopback(name))
                .fold((0u64, 0u64), |(sent, recv), (_, data)| {
                    (
                        sent.saturating_add(data.total_transmitted()),
                        recv.saturating_add(data.total_received()),
                    )
                })
        };

        Ok(CounterReadings {
            cpu_percent: cpu_percent.clamp(0.0, 100.0),
            mem_percent: mem_percent.clamp(0.0, 100.0),
            disk_percent: disk_percent.clamp(0.0, 100.0),
            bytes_sent,
            bytes_recv,
        })
    }
}

#[async_trait]
impl MetricSource for SysinfoSource {
    #[instrument(skip(self), fields(source = "sysinfo", operation = "sample"))]
    async fn sample(&self) -> Result<Sample, MetricError> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, operation = "get_timestamp", "system time error");
                0
            });

        let sys = self.sys.clone();
        let disks = self.disks.clone();
        let networks = self.networks.clone();
        let last_cpu_refresh = self.last_cpu_refresh.clone();
        let counters = tokio::task::spawn_blocking(move || {
            Self::read_counters(&sys, &disks, &networks, &last_cpu_refresh)
        });

        // Counter reads and the ping probe run concurrently; the probe is bounded by
        // its timeout so a dead host cannot stall the tick.
        let (counters, ping) = tokio::join!(counters, ping::probe(&self.ping_host, self.ping_timeout));
        let counters = counters
            .map_err(|e| MetricError::Unavailable(format!("sysinfo task join: {e}")))??;
        let ping_ms = match ping {
            Ok(ms) => Some(ms),
            Err(e) => {
                tracing::debug!(error = %e, host = %self.ping_host, "ping unreachable this tick");
                None
            }
        };

        Ok(Sample {
            timestamp,
            cpu_percent: counters.cpu_percent,
            mem_percent: counters.mem_percent,
            disk_percent: counters.disk_percent,
            bytes_sent: counters.bytes_sent,
            bytes_recv: counters.bytes_recv,
            ping_ms,
        })
    }
}

fn is_loopback(interface_name: &str) -> bool {
    let lname = interface_name.to_ascii_lowercase();
    lname == "lo" || lname == "lo0" || lname.contains("loopback")
}
