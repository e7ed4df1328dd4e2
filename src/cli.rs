// Command-line flags; converted to MonitorConfig in config.rs

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "sysmon", version, about = "Host resource monitor with threshold notifications")]
pub struct Cli {
    /// Sampling interval in seconds
    #[arg(long, default_value_t = 1)]
    pub interval: u64,

    /// CPU percent threshold to alert on
    #[arg(long = "cpu-thr", default_value_t = 90.0)]
    pub cpu_thr: f64,

    /// Memory percent threshold to alert on
    #[arg(long = "mem-thr", default_value_t = 70.0)]
    pub mem_thr: f64,

    /// Disk percent threshold to alert on (disk is informational when unset)
    #[arg(long = "disk-thr")]
    pub disk_thr: Option<f64>,

    /// Minimum seconds between repeated notifications for the same metric
    #[arg(long = "notify-interval", default_value_t = 10)]
    pub notify_interval: u64,

    /// Host to ping for latency measurement
    #[arg(long = "ping-host", default_value = "8.8.8.8", env = "SYSMON_PING_HOST")]
    pub ping_host: String,

    /// Run headless: print each tick to stdout instead of opening a window
    #[arg(long)]
    pub console: bool,

    /// With --console, print one JSON object per tick instead of the human line
    #[arg(long)]
    pub json: bool,

    /// Never attempt desktop toasts; send alerts to the console/log only
    #[arg(long = "no-toast")]
    pub no_toast: bool,
}
