// Sampling loop: read -> rate -> evaluate -> notify -> present, one tick at a time.

use crate::config::MonitorConfig;
use crate::models::{Sample, TickUpdate};
use crate::notify::NotificationSink;
use crate::presenter::Presenter;
use crate::rate;
use crate::source::MetricSource;
use crate::thresholds;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::{Duration, MissedTickBehavior, interval};

use crate::errors::MonitorError;

/// Source, sink, presenter, and shutdown for the sampling loop.
pub struct MonitorDeps {
    pub source: Arc<dyn MetricSource>,
    pub sink: NotificationSink,
    pub presenter: Box<dyn Presenter>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

/// Spawns the sampling loop. Ticks fire every `sample_interval_sec` measured from
/// the start of the previous tick; missed ticks are skipped rather than bunched.
/// Resolves `Ok(())` on shutdown, `Err(SamplingExhausted)` when the source fails
/// `failure_budget` consecutive times.
pub fn spawn(
    deps: MonitorDeps,
    config: MonitorConfig,
) -> tokio::task::JoinHandle<Result<(), MonitorError>> {
    let MonitorDeps {
        source,
        mut sink,
        mut presenter,
        mut shutdown_rx,
    } = deps;

    tokio::spawn(async move {
        let mut tick = interval(Duration::from_secs(config.sample_interval_sec));
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut prev_sample: Option<Sample> = None;
        let mut consecutive_failures: u32 = 0;

        tracing::info!(
            sample_interval_sec = config.sample_interval_sec,
            cpu_thr = config.cpu_threshold_pct,
            mem_thr = config.mem_threshold_pct,
            notify_interval_sec = config.notify_interval_sec,
            ping_host = %config.ping_host,
            "monitor started"
        );

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    let sample = match source.sample().await {
                        Ok(s) => {
                            consecutive_failures = 0;
                            s
                        }
                        Err(e) => {
                            consecutive_failures += 1;
                            tracing::warn!(
                                error = %e,
                                consecutive_failures,
                                operation = "sample",
                                "sample failed"
                            );
                            if consecutive_failures >= config.failure_budget {
                                tracing::error!(
                                    failures = consecutive_failures,
                                    "sampling exhausted; stopping monitor"
                                );
                                return Err(MonitorError::SamplingExhausted {
                                    failures: consecutive_failures,
                                    last_error: e.to_string(),
                                });
                            }
                            continue;
                        }
                    };

                    // No previous sample on the very first tick: rates stay zero.
                    let rates = prev_sample
                        .as_ref()
                        .map(|prev| rate::rates_between(prev, &sample))
                        .unwrap_or_default();
                    let exceeded = thresholds::evaluate(&sample, &config);
                    sink.maybe_notify(&exceeded, &sample, &rates, Instant::now());
                    presenter.present(TickUpdate {
                        sample: sample.clone(),
                        rates,
                        exceeded,
                    });
                    prev_sample = Some(sample);
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("monitor shutting down");
                    return Ok(());
                }
            }
        }
    })
}
