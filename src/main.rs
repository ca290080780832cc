//! StreamDash - a small streaming time-series dashboard written in Rust

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use streamdash::app::StreamDashApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Simple Stream Dashboard")
            .with_app_id("StreamDash")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "StreamDash",
        native_options,
        Box::new(|cc| Ok(Box::new(StreamDashApp::new(cc)))),
    )
}
