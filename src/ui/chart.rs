//! Trend chart rendering.

use chrono::DateTime;
use eframe::egui;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints};
use std::ops::RangeInclusive;

use crate::state::chart_color;
use crate::view::{PlotSeries, XAxis};

/// Height of the trend chart in pixels
pub const CHART_HEIGHT: f32 = 360.0;

/// Render the trend chart, one line per metric label
pub fn render_chart(ui: &mut egui::Ui, series: &PlotSeries) {
    let mut plot = Plot::new("trend_chart")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .y_axis_label("value");

    plot = match series.x_axis {
        XAxis::Time => plot.x_axis_label("timestamp").x_axis_formatter(format_time_mark),
        XAxis::Index => plot.x_axis_label("index"),
    };

    plot.show(ui, |plot_ui| {
        for (idx, line) in series.lines.iter().enumerate() {
            let color = chart_color(idx);
            let points: PlotPoints = line.points.iter().copied().collect();
            plot_ui.line(
                Line::new(line.label.clone(), points)
                    .color(egui::Color32::from_rgb(color[0], color[1], color[2]))
                    .width(1.5),
            );
        }
    });
}

/// Axis labels for epoch-second marks
fn format_time_mark(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    let secs = mark.value.floor() as i64;
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.naive_utc().format("%H:%M:%S").to_string())
        .unwrap_or_default()
}
