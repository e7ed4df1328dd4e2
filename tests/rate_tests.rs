// RateCalculator tests: wall-clock elapsed, counter-reset clamp

mod common;

use sysmon::rate::rates_between;

#[test]
fn test_rate_from_counter_delta_over_elapsed() {
    let mut prev = common::sample_at(10_000, 0.0, 0.0);
    prev.bytes_sent = 1_000;
    prev.bytes_recv = 5_000;
    let mut curr = common::sample_at(12_000, 0.0, 0.0);
    curr.bytes_sent = 3_000; // +2000 over 2s
    curr.bytes_recv = 9_000; // +4000 over 2s

    let rates = rates_between(&prev, &curr);
    assert_eq!(rates.upload_bps, 1_000.0);
    assert_eq!(rates.download_bps, 2_000.0);
}

#[test]
fn test_rate_uses_sample_timestamps_not_nominal_interval() {
    // 1.5s of jitter-stretched elapsed, not the configured 1s
    let mut prev = common::sample_at(10_000, 0.0, 0.0);
    prev.bytes_sent = 0;
    let mut curr = common::sample_at(11_500, 0.0, 0.0);
    curr.bytes_sent = 3_000;

    let rates = rates_between(&prev, &curr);
    assert_eq!(rates.upload_bps, 2_000.0);
}

#[test]
fn test_counter_reset_clamps_to_zero_not_negative() {
    let mut prev = common::sample_at(10_000, 0.0, 0.0);
    prev.bytes_sent = 1_000_000;
    prev.bytes_recv = 2_000_000;
    let mut curr = common::sample_at(11_000, 0.0, 0.0);
    curr.bytes_sent = 10; // interface restarted, counter reset
    curr.bytes_recv = 20;

    let rates = rates_between(&prev, &curr);
    assert_eq!(rates.upload_bps, 0.0);
    assert_eq!(rates.download_bps, 0.0);
}

#[test]
fn test_non_positive_elapsed_yields_zero_rates() {
    let mut prev = common::sample_at(10_000, 0.0, 0.0);
    prev.bytes_sent = 0;
    let mut curr = common::sample_at(10_000, 0.0, 0.0);
    curr.bytes_sent = 5_000;
    assert_eq!(rates_between(&prev, &curr), sysmon::models::Rates::default());

    // clock went backwards between samples
    let earlier = common::sample_at(9_000, 0.0, 0.0);
    assert_eq!(rates_between(&prev, &earlier), sysmon::models::Rates::default());
}
