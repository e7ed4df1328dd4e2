// CLI parsing and config validation tests

use clap::Parser;
use sysmon::cli::Cli;
use sysmon::config::MonitorConfig;

#[test]
fn test_cli_defaults_match_documented_flags() {
    let cli = Cli::parse_from(["sysmon"]);
    assert_eq!(cli.interval, 1);
    assert_eq!(cli.cpu_thr, 90.0);
    assert_eq!(cli.mem_thr, 70.0);
    assert_eq!(cli.disk_thr, None);
    assert_eq!(cli.notify_interval, 10);
    assert_eq!(cli.ping_host, "8.8.8.8");
    assert!(!cli.console);
    assert!(!cli.json);
    assert!(!cli.no_toast);
}

#[test]
fn test_cli_flags_override_defaults() {
    let cli = Cli::parse_from([
        "sysmon",
        "--interval",
        "5",
        "--cpu-thr",
        "80",
        "--mem-thr",
        "60",
        "--disk-thr",
        "95",
        "--notify-interval",
        "30",
        "--ping-host",
        "1.1.1.1",
        "--console",
        "--json",
        "--no-toast",
    ]);
    assert_eq!(cli.interval, 5);
    assert_eq!(cli.cpu_thr, 80.0);
    assert_eq!(cli.disk_thr, Some(95.0));
    assert_eq!(cli.notify_interval, 30);
    assert_eq!(cli.ping_host, "1.1.1.1");
    assert!(cli.console && cli.json && cli.no_toast);
}

#[test]
fn test_config_from_cli_carries_all_fields() {
    let cli = Cli::parse_from(["sysmon", "--interval", "2", "--cpu-thr", "85"]);
    let config = MonitorConfig::from_cli(&cli).expect("from_cli");
    assert_eq!(config.sample_interval_sec, 2);
    assert_eq!(config.cpu_threshold_pct, 85.0);
    assert_eq!(config.mem_threshold_pct, 70.0);
    assert_eq!(config.notify_interval_sec, 10);
    assert_eq!(config.ping_host, "8.8.8.8");
    assert_eq!(config.failure_budget, MonitorConfig::DEFAULT_FAILURE_BUDGET);
}

#[test]
fn test_config_rejects_zero_interval() {
    let cli = Cli::parse_from(["sysmon", "--interval", "0"]);
    let err = MonitorConfig::from_cli(&cli).unwrap_err();
    assert!(err.to_string().contains("--interval"));
}

#[test]
fn test_config_rejects_cpu_threshold_above_100() {
    let cli = Cli::parse_from(["sysmon", "--cpu-thr", "150"]);
    let err = MonitorConfig::from_cli(&cli).unwrap_err();
    assert!(err.to_string().contains("--cpu-thr"));
}

#[test]
fn test_config_rejects_negative_mem_threshold() {
    let cli = Cli::parse_from(["sysmon", "--mem-thr=-1"]);
    let err = MonitorConfig::from_cli(&cli).unwrap_err();
    assert!(err.to_string().contains("--mem-thr"));
}

#[test]
fn test_config_rejects_invalid_disk_threshold() {
    let cli = Cli::parse_from(["sysmon", "--disk-thr", "101"]);
    let err = MonitorConfig::from_cli(&cli).unwrap_err();
    assert!(err.to_string().contains("--disk-thr"));
}

#[test]
fn test_config_rejects_zero_notify_interval() {
    let cli = Cli::parse_from(["sysmon", "--notify-interval", "0"]);
    let err = MonitorConfig::from_cli(&cli).unwrap_err();
    assert!(err.to_string().contains("--notify-interval"));
}

#[test]
fn test_config_rejects_empty_ping_host() {
    let cli = Cli::parse_from(["sysmon", "--ping-host", ""]);
    let err = MonitorConfig::from_cli(&cli).unwrap_err();
    assert!(err.to_string().contains("--ping-host"));
}
