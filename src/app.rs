use anyhow::{Context, Result, anyhow};
use eframe::egui;

use crate::chart::ChartSpec;
use crate::cli::CommonArgs;
use crate::color::SeriesColors;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BenchPlotApp {
    pub spec: ChartSpec,
    colors: SeriesColors,
}

impl BenchPlotApp {
    pub fn new(spec: ChartSpec) -> Self {
        let colors = SeriesColors::new(&spec.series_set.labels());
        Self { spec, colors }
    }
}

impl eframe::App for BenchPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: chart title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.spec.title);
            });
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::series_plot(ui, &self.spec, &self.colors);
        });
    }
}

// ---------------------------------------------------------------------------
// Output stage shared by both binaries
// ---------------------------------------------------------------------------

/// Export if asked, then open the chart window and block until it is closed.
/// With `--headless` nothing is drawn.
pub fn present(spec: ChartSpec, common: &CommonArgs) -> Result<()> {
    if let Some(path) = &common.export {
        spec.export(path)?;
    }

    if common.headless {
        log::info!(
            "Headless: {} series over {} rows, no window",
            spec.series_set.series.len(),
            spec.series_set.len()
        );
        return Ok(());
    }

    show(spec)
}

/// Run the native window at a 2:1 aspect ratio.
pub fn show(spec: ChartSpec) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 600.0])
            .with_min_inner_size([600.0, 300.0]),
        ..Default::default()
    };

    let window_title = spec.title.clone();
    eframe::run_native(
        &window_title,
        options,
        Box::new(|_cc| Ok(Box::new(BenchPlotApp::new(spec)))),
    )
    .map_err(|e| anyhow!("{e}"))
    .context("running chart window")
}
