// Monitor configuration: built once from CLI flags, immutable for the process lifetime.

use crate::cli::Cli;

/// Thresholds and timing for the sampling loop. No live reconfiguration.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub sample_interval_sec: u64,
    pub cpu_threshold_pct: f64,
    pub mem_threshold_pct: f64,
    /// Disk usage is informational unless a threshold is configured.
    pub disk_threshold_pct: Option<f64>,
    pub notify_interval_sec: u64,
    pub ping_host: String,
    /// Consecutive whole-sample failures tolerated before the loop stops.
    pub failure_budget: u32,
}

impl MonitorConfig {
    pub const DEFAULT_FAILURE_BUDGET: u32 = 3;

    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let config = Self {
            sample_interval_sec: cli.interval,
            cpu_threshold_pct: cli.cpu_thr,
            mem_threshold_pct: cli.mem_thr,
            disk_threshold_pct: cli.disk_thr,
            notify_interval_sec: cli.notify_interval,
            ping_host: cli.ping_host.clone(),
            failure_budget: Self::DEFAULT_FAILURE_BUDGET,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.sample_interval_sec > 0,
            "--interval must be > 0, got {}",
            self.sample_interval_sec
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.cpu_threshold_pct),
            "--cpu-thr must be between 0 and 100, got {}",
            self.cpu_threshold_pct
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.mem_threshold_pct),
            "--mem-thr must be between 0 and 100, got {}",
            self.mem_threshold_pct
        );
        if let Some(disk) = self.disk_threshold_pct {
            anyhow::ensure!(
                (0.0..=100.0).contains(&disk),
                "--disk-thr must be between 0 and 100, got {}",
                disk
            );
        }
        anyhow::ensure!(
            self.notify_interval_sec > 0,
            "--notify-interval must be > 0, got {}",
            self.notify_interval_sec
        );
        anyhow::ensure!(!self.ping_host.is_empty(), "--ping-host must be non-empty");
        anyhow::ensure!(
            self.failure_budget > 0,
            "failure budget must be > 0, got {}",
            self.failure_budget
        );
        Ok(())
    }
}
