//! UI rendering modules for the StreamDash window.
//!
//! - `side_panel` - Mode, refresh, download and filter controls
//! - `dashboard` - Trend, quick stats, info column and raw table
//! - `chart` - Trend chart rendering
//! - `export` - CSV download through the native save dialog
//! - `toast` - Toast notification system

pub mod chart;
pub mod dashboard;
pub mod export;
pub mod side_panel;
pub mod toast;
