//! Host shell state types and constants.
//!
//! The dashboard core lives in [`crate::session`]; this module only holds
//! what the window needs to remember between frames.

use std::path::PathBuf;

use crate::generator::SENSOR_IDS;

// ============================================================================
// Constants
// ============================================================================

/// Primary theme colour (teal)
pub const PRIMARY: [u8; 3] = [0x00, 0x89, 0x7B];

/// Accent theme colour (dark teal)
pub const ACCENT: [u8; 3] = [0x00, 0x4D, 0x40];

/// Window background
pub const BACKGROUND: [u8; 3] = [0xF4, 0xF6, 0xF6];

/// Line colours, cycled per metric label in order of first appearance
pub const CHART_COLORS: &[[u8; 3]] = &[PRIMARY, ACCENT];

/// Extensions accepted by the upload dialog
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv"];

/// Sensor ids offered in the sensor filter
pub const SENSOR_CHOICES: &[&str] = SENSOR_IDS;

/// Height of the raw data table in pixels
pub const TABLE_HEIGHT: f32 = 350.0;

/// How long a toast stays on screen, in seconds
pub const TOAST_SECONDS: u64 = 3;

// ============================================================================
// Core Types
// ============================================================================

/// A file picked or dropped in upload mode
#[derive(Clone)]
pub struct UploadedFile {
    /// Where the file came from, for display only
    pub path: PathBuf,
    /// Display name for the file
    pub name: String,
    /// Raw contents, re-parsed on every pass
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(path: PathBuf, bytes: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        Self { path, name, bytes }
    }
}

/// Type of toast notification (determines color)
#[derive(Clone, Copy, Default)]
pub enum ToastType {
    /// Informational message
    #[default]
    Info,
    /// Success message
    Success,
    /// Warning message (amber)
    Warning,
    /// Error message (red)
    Error,
}

impl ToastType {
    /// Get the background color for this toast type
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => ACCENT,
            ToastType::Success => PRIMARY,
            ToastType::Warning => [253, 193, 73], // Amber
            ToastType::Error => [135, 30, 28],    // Dark red
        }
    }

    /// Get the text color for this toast type
    pub fn text_color(&self) -> [u8; 3] {
        match self {
            ToastType::Warning => [30, 30, 30], // Dark text for amber background
            _ => [255, 255, 255],
        }
    }
}

/// Pick the line colour for the n-th metric label
pub fn chart_color(index: usize) -> [u8; 3] {
    CHART_COLORS[index % CHART_COLORS.len()]
}
