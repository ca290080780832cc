//! One interactive session and the per-tick pass that drives it.
//!
//! A [`Session`] owns the only state that outlives a pass: the live-mode
//! rolling buffer. Everything else is rebuilt from scratch on every call to
//! [`Session::run_pass`], which never fails. Parse problems come back as a
//! [`Notice`] next to an empty view.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

use crate::analysis::{compute_summary_stats, filter, FilterSpec, SummaryStats};
use crate::buffer::RollingBuffer;
use crate::generator;
use crate::parsers::{CsvFile, RowSet};
use crate::view::{self, CsvExport, DisplayTable, InfoSummary, PlotSeries};

/// Rows generated for the sample-data mode
pub const SAMPLE_ROWS: usize = 200;

/// Shown when rows were produced but none survived the filters
pub const ALL_FILTERED_MESSAGE: &str = "All rows filtered out. Adjust the metric or sensor filters.";

/// Where the rows for a pass come from
#[derive(
    AsRefStr, Clone, Copy, Debug, Default, EnumIter, EnumString, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Simulated readings from the rolling buffer
    #[default]
    Live,
    /// A user-supplied CSV file
    Upload,
    /// A one-off batch of generated rows
    Sample,
}

impl Mode {
    /// Human-readable label for the mode selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Live => "Live (simulated)",
            Mode::Upload => "Upload CSV",
            Mode::Sample => "Sample data",
        }
    }

    pub fn all() -> Vec<Mode> {
        Mode::iter().collect()
    }
}

/// Message for the host to surface next to the view
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(m) | Notice::Warning(m) => m,
        }
    }
}

/// Host inputs for one pass
#[derive(Clone, Debug)]
pub struct PassInput {
    pub mode: Mode,
    pub auto_refresh: bool,
    pub filter: FilterSpec,
    /// Raw bytes of the uploaded file, if any
    pub upload: Option<Vec<u8>>,
    pub now: NaiveDateTime,
}

/// Everything the host renders after a pass
#[derive(Clone, Debug)]
pub struct DashboardView {
    pub mode: Mode,
    /// Rows after filtering
    pub rows: RowSet,
    pub plot: PlotSeries,
    pub stats: SummaryStats,
    pub table: DisplayTable,
    pub info: InfoSummary,
    pub notice: Option<Notice>,
}

impl DashboardView {
    /// Derive every artifact from an already filtered row set
    pub fn derive(mode: Mode, rows: RowSet, notice: Option<Notice>) -> Self {
        Self {
            mode,
            plot: view::plot_series(&rows),
            stats: compute_summary_stats(&rows),
            table: view::display_table(&rows),
            info: InfoSummary::new(mode.display_name(), &rows),
            rows,
            notice,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// CSV payload for the download button
    pub fn export(&self) -> Result<CsvExport, csv::Error> {
        view::export_csv(&self.rows)
    }
}

/// State scoped to one interactive session
#[derive(Debug, Default)]
pub struct Session {
    buffer: Option<RollingBuffer>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live buffer, if live mode has been entered
    pub fn buffer(&self) -> Option<&RollingBuffer> {
        self.buffer.as_ref()
    }

    /// Drop all session state; the next live pass starts a fresh buffer
    pub fn reset(&mut self) {
        self.buffer = None;
    }

    /// Run one pass: produce rows for the mode, filter, derive the view
    pub fn run_pass(&mut self, input: &PassInput) -> DashboardView {
        let (rows, notice) = match input.mode {
            Mode::Live => (self.live_rows(input.auto_refresh, input.now), None),
            Mode::Sample => (generator::generate(SAMPLE_ROWS, input.now), None),
            Mode::Upload => upload_rows(input.upload.as_deref()),
        };

        if rows.is_empty() {
            return DashboardView::derive(input.mode, rows, notice);
        }

        let filtered = filter(&rows, &input.filter);
        let notice = notice.or_else(|| {
            filtered
                .is_empty()
                .then(|| Notice::Info(ALL_FILTERED_MESSAGE.into()))
        });

        DashboardView::derive(input.mode, filtered, notice)
    }

    fn live_rows(&mut self, auto_refresh: bool, now: NaiveDateTime) -> RowSet {
        let buffer = self.buffer.get_or_insert_with(|| {
            tracing::info!("Starting live buffer");
            RollingBuffer::new(now)
        });

        if auto_refresh {
            buffer.tick(now);
        }

        buffer.snapshot()
    }
}

/// Parse an upload, turning every failure into a notice and an empty set
fn upload_rows(upload: Option<&[u8]>) -> (RowSet, Option<Notice>) {
    let Some(bytes) = upload else {
        return (RowSet::default(), Some(Notice::Info("No file uploaded.".into())));
    };

    match CsvFile.ingest(bytes) {
        Ok(rows) => (rows, None),
        Err(e) => {
            tracing::warn!("Failed to parse uploaded CSV: {}", e);
            (
                RowSet::default(),
                Some(Notice::Warning("Failed to parse CSV.".into())),
            )
        }
    }
}
