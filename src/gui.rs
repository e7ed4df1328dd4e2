// Graphical front-end (feature "gui"): a small always-current readout over the
// latest-wins tick channel. Rendering never blocks the sampling loop; a slow frame
// simply observes the newest tick.

use crate::models::{Metric, TickUpdate};
use tokio::sync::watch;

/// Opens the monitor window and blocks until it is closed.
pub fn run(rx: watch::Receiver<Option<TickUpdate>>) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([380.0, 240.0])
            .with_min_inner_size([300.0, 180.0]),
        ..Default::default()
    };
    eframe::run_native(
        "sysmon",
        native_options,
        Box::new(move |_cc| Ok(Box::new(MonitorWindow { rx }))),
    )
}

struct MonitorWindow {
    rx: watch::Receiver<Option<TickUpdate>>,
}

impl eframe::App for MonitorWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let update = self.rx.borrow().clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("System Monitor");
            ui.separator();
            match update {
                Some(u) => draw_readout(ui, &u),
                None => {
                    ui.label("Waiting for first sample...");
                }
            }
        });
        // Repaint on our own cadence; the watch channel always holds the newest tick.
        ctx.request_repaint_after(std::time::Duration::from_millis(500));
    }
}

fn draw_readout(ui: &mut egui::Ui, update: &TickUpdate) {
    egui::Grid::new("readout").num_columns(2).show(ui, |ui| {
        metric_row(ui, update, Metric::Cpu, "CPU", update.sample.cpu_percent);
        metric_row(ui, update, Metric::Memory, "Memory", update.sample.mem_percent);
        metric_row(ui, update, Metric::Disk, "Disk", update.sample.disk_percent);

        ui.label("Upload:");
        ui.label(format!("{:.2} KB/s", update.rates.upload_bps / 1024.0));
        ui.end_row();

        ui.label("Download:");
        ui.label(format!("{:.2} KB/s", update.rates.download_bps / 1024.0));
        ui.end_row();

        ui.label("Ping:");
        match update.sample.ping_ms {
            Some(ms) => ui.label(format!("{ms:.0} ms")),
            None => ui.colored_label(egui::Color32::GRAY, "unreachable"),
        };
        ui.end_row();
    });
}

fn metric_row(ui: &mut egui::Ui, update: &TickUpdate, metric: Metric, label: &str, value: f64) {
    ui.label(format!("{label}:"));
    let text = format!("{value:.1}%");
    if update.exceeded.contains(&metric) {
        ui.colored_label(egui::Color32::RED, text);
    } else {
        ui.label(text);
    }
    ui.end_row();
}
