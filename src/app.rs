//! Main application state and the eframe::App implementation.
//!
//! The app is the host shell around [`Session`]: it owns the refresh timer
//! and the widgets, and runs one pass whenever a control changes or the
//! refresh interval elapses in live mode.

use eframe::egui;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::session::{DashboardView, Mode, Notice, PassInput, Session};
use crate::settings::DashboardSettings;
use crate::state::{ToastType, UploadedFile, BACKGROUND};

/// Main application state
pub struct StreamDashApp {
    /// Session state (the live rolling buffer)
    pub(crate) session: Session,
    /// Persisted dashboard preferences
    pub(crate) settings: DashboardSettings,
    /// File picked in upload mode
    pub(crate) upload: Option<UploadedFile>,
    /// Output of the most recent pass
    pub(crate) view: Option<DashboardView>,
    /// When the most recent pass ran
    last_pass: Option<Instant>,
    /// Set by controls that change the inputs of a pass
    pub(crate) pass_requested: bool,
    /// Set by the download button, handled after rendering
    pub(crate) export_requested: bool,
    /// Toast message for user feedback
    pub(crate) toast_message: Option<(String, Instant, ToastType)>,
}

impl Default for StreamDashApp {
    fn default() -> Self {
        Self::with_settings(DashboardSettings::default())
    }
}

impl StreamDashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_settings(DashboardSettings::load())
    }

    pub fn with_settings(settings: DashboardSettings) -> Self {
        Self {
            session: Session::new(),
            settings,
            upload: None,
            view: None,
            last_pass: None,
            pass_requested: true,
            export_requested: false,
            toast_message: None,
        }
    }

    // ========================================================================
    // Toasts
    // ========================================================================

    pub fn show_toast(&mut self, message: &str) {
        self.show_toast_with_type(message, ToastType::Info);
    }

    pub fn show_toast_success(&mut self, message: &str) {
        self.show_toast_with_type(message, ToastType::Success);
    }

    pub fn show_toast_warning(&mut self, message: &str) {
        self.show_toast_with_type(message, ToastType::Warning);
    }

    pub fn show_toast_error(&mut self, message: &str) {
        self.show_toast_with_type(message, ToastType::Error);
    }

    fn show_toast_with_type(&mut self, message: &str, toast_type: ToastType) {
        self.toast_message = Some((message.to_string(), Instant::now(), toast_type));
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Persist preferences and schedule a pass with the new inputs
    pub(crate) fn settings_changed(&mut self) {
        self.pass_requested = true;
        if let Err(e) = self.settings.save() {
            tracing::warn!("{}", e);
            self.show_toast_error(&format!("Failed to save settings: {}", e));
        }
    }

    fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.settings.refresh_interval_secs)
    }

    fn is_auto_refreshing(&self) -> bool {
        self.settings.mode == Mode::Live && self.settings.auto_refresh
    }

    // ========================================================================
    // Uploads
    // ========================================================================

    /// Read a picked or dropped file into memory
    pub(crate) fn load_upload(&mut self, path: PathBuf) {
        match fs::read(&path) {
            Ok(bytes) => {
                let file = UploadedFile::new(path, bytes);
                tracing::info!("Loaded upload {} ({} bytes)", file.name, file.bytes.len());
                self.show_toast(&format!("Loaded {}", file.name));
                self.upload = Some(file);
                self.pass_requested = true;
            }
            Err(e) => self.show_toast_error(&format!("Failed to read file: {}", e)),
        }
    }

    /// Handle files dropped onto the window
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        if self.settings.mode != Mode::Upload {
            self.settings.mode = Mode::Upload;
            self.settings_changed();
        }

        match (file.bytes, file.path) {
            (Some(bytes), path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(file.name));
                self.upload = Some(UploadedFile::new(path, bytes.to_vec()));
                self.pass_requested = true;
            }
            (None, Some(path)) => self.load_upload(path),
            (None, None) => self.show_toast_error("Dropped file could not be read"),
        }
    }

    // ========================================================================
    // Passes
    // ========================================================================

    /// Whether a pass should run this frame
    fn pass_due(&self) -> bool {
        if self.pass_requested || self.view.is_none() {
            return true;
        }
        self.is_auto_refreshing()
            && self
                .last_pass
                .is_none_or(|t| t.elapsed() >= self.refresh_interval())
    }

    /// Run one pass through the session with the current inputs
    pub(crate) fn run_pass(&mut self) {
        let input = PassInput {
            mode: self.settings.mode,
            auto_refresh: self.settings.auto_refresh,
            filter: self.settings.filter.clone(),
            upload: self.upload.as_ref().map(|f| f.bytes.clone()),
            now: chrono::Local::now().naive_local(),
        };

        let view = self.session.run_pass(&input);

        // Only toast fresh warnings, not the same one every tick
        let previous = self.view.as_ref().and_then(|v| v.notice.clone());
        if let Some(Notice::Warning(message)) = &view.notice {
            if previous.as_ref() != view.notice.as_ref() || self.pass_requested {
                self.show_toast_warning(message);
            }
        }

        self.view = Some(view);
        self.last_pass = Some(Instant::now());
        self.pass_requested = false;
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();
        let bg = egui::Color32::from_rgb(BACKGROUND[0], BACKGROUND[1], BACKGROUND[2]);
        visuals.panel_fill = bg;
        visuals.window_fill = bg;
        ctx.set_visuals(visuals);
    }
}

impl eframe::App for StreamDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        if self.pass_due() {
            self.run_pass();
        }

        if self.is_auto_refreshing() {
            let remaining = self
                .last_pass
                .map(|t| self.refresh_interval().saturating_sub(t.elapsed()))
                .unwrap_or_default();
            ctx.request_repaint_after(remaining);
        }

        self.apply_theme(ctx);

        // Toast notifications
        self.render_toast(ctx);

        egui::SidePanel::left("controls_panel")
            .default_width(260.0)
            .min_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.render_side_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_dashboard(ui);
        });

        if self.export_requested {
            self.export_requested = false;
            self.export_current_data();
        }

        // Controls changed this frame; run the pass without waiting for input
        if self.pass_requested {
            ctx.request_repaint();
        }
    }
}
