// SysinfoSource smoke test and ping output parsing

use std::time::Duration;
use sysmon::source::{MetricSource, SysinfoSource, ping};

#[test]
fn test_parse_linux_ping_output() {
    let out = "PING 8.8.8.8 (8.8.8.8) 56(84) bytes of data.\n\
               64 bytes from 8.8.8.8: icmp_seq=1 ttl=117 time=18.3 ms\n";
    assert_eq!(ping::parse_latency_ms(out), Some(18.3));
}

#[test]
fn test_parse_windows_ping_output() {
    let out = "Reply from 8.8.8.8: bytes=32 time=19ms TTL=117\n";
    assert_eq!(ping::parse_latency_ms(out), Some(19.0));
}

#[test]
fn test_parse_sub_millisecond_ping_output() {
    let out = "Reply from 127.0.0.1: bytes=32 time<1ms TTL=128\n";
    assert_eq!(ping::parse_latency_ms(out), Some(1.0));
}

#[test]
fn test_parse_rejects_output_without_latency() {
    assert_eq!(ping::parse_latency_ms("Request timed out.\n"), None);
    assert_eq!(ping::parse_latency_ms(""), None);
    assert_eq!(ping::parse_latency_ms("time= ms"), None);
}

// Smoke test against the real OS. Percentages must land in range whatever the host
// looks like; ping may legitimately be unreachable (no ping binary, no network).
#[tokio::test]
async fn test_sysinfo_source_produces_in_range_sample() {
    let source = SysinfoSource::new("127.0.0.1", Duration::from_secs(1));
    let sample = source.sample().await.expect("sample");

    assert!(sample.timestamp > 0);
    assert!((0.0..=100.0).contains(&sample.cpu_percent));
    assert!((0.0..=100.0).contains(&sample.mem_percent));
    assert!((0.0..=100.0).contains(&sample.disk_percent));
    if let Some(ms) = sample.ping_ms {
        assert!(ms >= 0.0);
    }
}

#[tokio::test]
async fn test_sysinfo_source_counters_are_monotonic_across_samples() {
    let source = SysinfoSource::new("127.0.0.1", Duration::from_secs(1));
    let first = source.sample().await.expect("first sample");
    let second = source.sample().await.expect("second sample");

    assert!(second.timestamp >= first.timestamp);
    assert!(second.bytes_sent >= first.bytes_sent);
    assert!(second.bytes_recv >= first.bytes_recv);
}
