//! Controls panel - mode, refresh, table toggle, download and filters.

use eframe::egui;

use crate::app::StreamDashApp;
use crate::generator::METRIC_TYPES;
use crate::session::{Mode, Notice};
use crate::settings::REFRESH_INTERVAL_RANGE;
use crate::state::{SENSOR_CHOICES, SUPPORTED_EXTENSIONS};

impl StreamDashApp {
    /// Render the controls side panel
    pub fn render_side_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Controls");
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.render_mode_controls(ui);

                if self.settings.mode == Mode::Upload {
                    ui.add_space(8.0);
                    self.render_upload_controls(ui);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.render_filter_controls(ui);
            });
    }

    fn render_mode_controls(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;

        ui.label("Mode");
        egui::ComboBox::from_id_salt("mode_selector")
            .selected_text(self.settings.mode.display_name())
            .width(200.0)
            .show_ui(ui, |ui| {
                for mode in Mode::all() {
                    changed |= ui
                        .selectable_value(&mut self.settings.mode, mode, mode.display_name())
                        .changed();
                }
            });

        ui.add_space(4.0);
        changed |= ui
            .checkbox(&mut self.settings.auto_refresh, "Auto-refresh (Live)")
            .changed();

        ui.label("Refresh interval (seconds)");
        changed |= ui
            .add(egui::Slider::new(
                &mut self.settings.refresh_interval_secs,
                REFRESH_INTERVAL_RANGE,
            ))
            .changed();

        changed |= ui
            .checkbox(&mut self.settings.show_table, "Show raw table")
            .changed();

        ui.add_space(4.0);
        let has_rows = self.view.as_ref().is_some_and(|v| !v.is_empty());
        if ui
            .add_enabled(has_rows, egui::Button::new("Download current data (CSV)"))
            .clicked()
        {
            self.export_requested = true;
        }

        if changed {
            self.settings_changed();
        }
    }

    fn render_upload_controls(&mut self, ui: &mut egui::Ui) {
        ui.label("Upload CSV with at least 'timestamp' and 'value' columns");

        if ui.button("Choose file...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("CSV", SUPPORTED_EXTENSIONS)
                .pick_file()
            {
                self.load_upload(path);
            }
        }

        if let Some(file) = &self.upload {
            ui.label(egui::RichText::new(&file.name).strong())
                .on_hover_text(file.path.display().to_string());
            if ui.small_button("Clear").clicked() {
                self.upload = None;
                self.pass_requested = true;
            }
        }

        if let Some(notice) = self.view.as_ref().and_then(|v| v.notice.as_ref()) {
            let color = match notice {
                Notice::Info(_) => egui::Color32::GRAY,
                Notice::Warning(_) => egui::Color32::from_rgb(135, 30, 28),
            };
            ui.colored_label(color, notice.message());
        }
    }

    fn render_filter_controls(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;

        ui.strong("Filters");
        ui.add_space(4.0);

        ui.label("Metric Type");
        for metric in METRIC_TYPES {
            changed |= toggle_membership(ui, &mut self.settings.filter.metrics, metric);
        }

        ui.add_space(4.0);
        ui.label("Sensor ID");
        for sensor in SENSOR_CHOICES {
            changed |= toggle_membership(ui, &mut self.settings.filter.sensors, sensor);
        }
        if self.settings.filter.sensors.is_empty() {
            ui.label(
                egui::RichText::new("No sensors selected: showing all")
                    .small()
                    .color(egui::Color32::GRAY),
            );
        }

        if changed {
            self.settings_changed();
        }
    }
}

/// Checkbox bound to set membership; returns true when toggled
fn toggle_membership(
    ui: &mut egui::Ui,
    set: &mut std::collections::BTreeSet<String>,
    item: &str,
) -> bool {
    let mut selected = set.contains(item);
    if ui.checkbox(&mut selected, item).changed() {
        if selected {
            set.insert(item.to_string());
        } else {
            set.remove(item);
        }
        return true;
    }
    false
}
