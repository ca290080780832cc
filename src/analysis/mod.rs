//! Row set analysis: membership filtering and summary statistics.
//!
//! Everything in here is a pure function of its input row set, so the host
//! can call it once per pass without carrying state between passes.

pub mod filters;
pub mod statistics;

pub use filters::{filter, FilterSpec};
pub use statistics::{compute_summary_stats, SummaryStats};
