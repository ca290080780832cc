//! Central dashboard area: trend, quick stats, info and the raw table.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::analysis::statistics::NO_DATA_PLACEHOLDER;
use crate::analysis::SummaryStats;
use crate::app::StreamDashApp;
use crate::session::Notice;
use crate::state::{ACCENT, PRIMARY, TABLE_HEIGHT};
use crate::view::{DisplayTable, InfoSummary};

use super::chart::render_chart;

impl StreamDashApp {
    /// Render the central dashboard for the latest pass
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        ui.heading(
            egui::RichText::new("Simple Streaming Dashboard")
                .color(egui::Color32::from_rgb(PRIMARY[0], PRIMARY[1], PRIMARY[2])),
        );
        ui.add_space(8.0);

        let Some(view) = &self.view else {
            ui.label("No data available.");
            return;
        };
        let show_table = self.settings.show_table;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let total_width = ui.available_width();
                ui.horizontal_top(|ui| {
                    ui.allocate_ui(egui::vec2(total_width * 0.75, 0.0), |ui| {
                        ui.vertical(|ui| {
                            ui.strong("Trend");
                            if view.plot.is_empty() {
                                let message = view
                                    .notice
                                    .as_ref()
                                    .map_or("No data available.", Notice::message);
                                ui.label(message);
                            } else {
                                render_chart(ui, &view.plot);
                            }

                            egui::CollapsingHeader::new("Quick stats")
                                .default_open(false)
                                .show(ui, |ui| render_stats(ui, &view.stats));
                        });
                    });

                    ui.vertical(|ui| {
                        ui.strong("Controls & Info");
                        render_info(ui, &view.info);
                    });
                });

                if show_table && !view.table.is_empty() {
                    ui.add_space(12.0);
                    ui.separator();
                    ui.strong("Raw data (latest first)");
                    render_table(ui, &view.table);
                }
            });
    }
}

fn render_stats(ui: &mut egui::Ui, stats: &SummaryStats) {
    if stats.is_empty() {
        ui.label(NO_DATA_PLACEHOLDER);
        return;
    }

    let accent = egui::Color32::from_rgb(ACCENT[0], ACCENT[1], ACCENT[2]);
    for (label, value) in stats.display_rows() {
        ui.label(egui::RichText::new(label).small());
        ui.label(egui::RichText::new(value).size(22.0).color(accent));
        ui.add_space(4.0);
    }
}

fn render_info(ui: &mut egui::Ui, info: &InfoSummary) {
    for line in info.lines() {
        ui.label(format!("- {}", line));
    }
    ui.separator();
}

fn render_table(ui: &mut egui::Ui, table: &DisplayTable) {
    let row_height = egui::TextStyle::Body.resolve(ui.style()).size + 6.0;

    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(TABLE_HEIGHT)
        .columns(Column::auto().at_least(80.0).resizable(true), table.columns.len())
        .header(20.0, |mut header| {
            for name in &table.columns {
                header.col(|ui| {
                    ui.strong(name.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(row_height, table.rows.len(), |mut row| {
                let cells = &table.rows[row.index()];
                for cell in cells {
                    row.col(|ui| {
                        ui.label(cell.as_str());
                    });
                }
            });
        });
}
