//! StreamDash - a small streaming time-series dashboard written in Rust
//!
//! The library holds the data pipeline behind the dashboard: a rolling
//! buffer of simulated readings, a CSV ingestor for uploads, membership
//! filters, and the derived views (plot series, summary statistics,
//! display table, CSV export). The eframe window in [`app`] is a thin host
//! that runs one [`session::Session::run_pass`] per refresh tick.
//!
//! ## Module Structure
//!
//! - [`generator`] - Synthetic readings for live and sample modes
//! - [`parsers`] - Row types and the uploaded CSV parser
//! - [`buffer`] - Bounded rolling window for live mode
//! - [`analysis`] - Filters and summary statistics
//! - [`view`] - Plot series, display table, CSV export, info summary
//! - [`session`] - Session state and the per-tick pass
//! - [`settings`] - User settings persistence
//! - [`state`] - Host shell constants and types
//! - [`app`] - Main application state and eframe::App implementation
//! - [`ui`] - User interface components

pub mod analysis;
pub mod app;
pub mod buffer;
pub mod generator;
pub mod parsers;
pub mod session;
pub mod settings;
pub mod state;
pub mod ui;
pub mod view;
