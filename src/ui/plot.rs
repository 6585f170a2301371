use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::chart::ChartSpec;
use crate::color::SeriesColors;

// ---------------------------------------------------------------------------
// Benchmark line chart (central panel)
// ---------------------------------------------------------------------------

/// Draw one line per series against the shared x values.
pub fn series_plot(ui: &mut Ui, spec: &ChartSpec, colors: &SeriesColors) {
    let set = &spec.series_set;

    Plot::new("benchmark_plot")
        .legend(Legend::default())
        .x_axis_label(spec.x_label.as_str())
        .y_axis_label(spec.y_label.as_str())
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &set.series {
                let points: PlotPoints = line_points(&set.x, &series.y).into();

                let line = Line::new(points)
                    .name(&series.label)
                    .color(colors.color_for(&series.label))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}

/// Pair up x and y values. Non-finite values are kept as they are.
pub fn line_points(x: &[f64], y: &[f64]) -> Vec<[f64; 2]> {
    x.iter().zip(y).map(|(&xi, &yi)| [xi, yi]).collect()
}
