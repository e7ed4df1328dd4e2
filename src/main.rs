use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use sysmon::cli::Cli;
use sysmon::config::MonitorConfig;
use sysmon::monitor::{self, MonitorDeps};
use sysmon::notify::{ConsoleNotifier, DesktopNotifier, NotificationSink, Notifier};
use sysmon::presenter::ConsolePresenter;
use sysmon::source::{MetricSource, SysinfoSource};
use sysmon::version;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();
    let config = MonitorConfig::from_cli(&cli)?;
    tracing::info!(version = version::VERSION, "starting {}", version::NAME);

    // The ping probe must not outlive the tick it runs in.
    let ping_timeout = Duration::from_secs(config.sample_interval_sec);
    let source: Arc<dyn MetricSource> =
        Arc::new(SysinfoSource::new(config.ping_host.clone(), ping_timeout));

    let transport: Box<dyn Notifier> = if cli.no_toast || cli.console {
        Box::new(ConsoleNotifier)
    } else {
        Box::new(DesktopNotifier::new())
    };
    let sink = NotificationSink::new(transport, Duration::from_secs(config.notify_interval_sec));

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    #[cfg(feature = "gui")]
    {
        if !cli.console {
            let (presenter, rx) = sysmon::presenter::ChannelPresenter::new();
            let handle = monitor::spawn(
                MonitorDeps {
                    source,
                    sink,
                    presenter: Box::new(presenter),
                    shutdown_rx,
                },
                config,
            );
            sysmon::gui::run(rx).map_err(|e| anyhow::anyhow!("gui front-end: {e}"))?;
            tracing::info!("Window closed");
            let _ = shutdown_tx.send(());
            return handle
                .await
                .map_err(|e| anyhow::anyhow!("monitor task join: {e}"))?
                .map_err(Into::into);
        }
    }

    #[cfg(not(feature = "gui"))]
    {
        if !cli.console {
            tracing::info!("GUI front-end not built in (gui feature disabled); using console mode");
        }
    }

    let presenter = Box::new(ConsolePresenter::new(cli.json));
    let mut handle = monitor::spawn(
        MonitorDeps {
            source,
            sink,
            presenter,
            shutdown_rx,
        },
        config,
    );

    tokio::select! {
        result = &mut handle => {
            result.map_err(|e| anyhow::anyhow!("monitor task join: {e}"))??;
        }
        _ = shutdown_signal() => {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(());
            handle
                .await
                .map_err(|e| anyhow::anyhow!("monitor task join: {e}"))??;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(s) => s,
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
