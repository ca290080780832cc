//! Transient status message pinned under the dashboard heading.
//!
//! The toast holds for most of [`TOAST_SECONDS`] and then fades out.
//! Warnings and errors carry a short text prefix.

use eframe::egui;
use std::time::Duration;

use crate::app::StreamDashApp;
use crate::state::{ToastType, TOAST_SECONDS};

/// Length of the fade at the end of a toast's lifetime
const FADE: Duration = Duration::from_millis(600);

/// Opacity for a toast shown `elapsed` ago, `None` once it has expired
fn toast_opacity(elapsed: Duration) -> Option<f32> {
    let lifetime = Duration::from_secs(TOAST_SECONDS);
    let remaining = lifetime.checked_sub(elapsed).filter(|r| !r.is_zero())?;
    Some((remaining.as_secs_f32() / FADE.as_secs_f32()).min(1.0))
}

fn prefix(toast_type: ToastType) -> &'static str {
    match toast_type {
        ToastType::Warning => "Warning: ",
        ToastType::Error => "Error: ",
        ToastType::Info | ToastType::Success => "",
    }
}

fn rgb(c: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(c[0], c[1], c[2])
}

impl StreamDashApp {
    /// Draw the current toast, clearing it once it has faded
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let Some((message, shown_at, toast_type)) = &self.toast_message else {
            return;
        };
        let Some(opacity) = toast_opacity(shown_at.elapsed()) else {
            self.toast_message = None;
            return;
        };

        let fill = rgb(toast_type.color()).gamma_multiply(opacity);
        let text = rgb(toast_type.text_color()).gamma_multiply(opacity);
        let label = format!("{}{}", prefix(*toast_type), message);

        egui::Area::new(egui::Id::new("status_toast"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 48.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(fill)
                    .corner_radius(4)
                    .inner_margin(egui::Margin::symmetric(14, 8))
                    .show(ui, |ui| {
                        ui.set_max_width(420.0);
                        ui.label(egui::RichText::new(label).color(text));
                    });
            });

        // Animate the fade, otherwise just wake up when it starts
        let until_fade = Duration::from_secs(TOAST_SECONDS)
            .saturating_sub(shown_at.elapsed())
            .saturating_sub(FADE);
        if until_fade.is_zero() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(until_fade);
        }
    }
}
