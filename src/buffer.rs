//! Bounded rolling window of live readings.
//!
//! The buffer is created with a backfill, grows by one small batch per
//! refresh tick and keeps only the newest [`MAX_BUFFER_ROWS`] rows.
//!
//! A batch normally ends at the tick time. A batch spans
//! `TICK_BATCH_ROWS * SAMPLE_SPACING_SECS` seconds, and ticks can come
//! sooner than that (the first live pass ticks right after the backfill).
//! In that case the batch is moved forward to start one spacing after the
//! newest buffered row. Every batch is therefore strictly newer than the
//! one before, and the contents stay chronological without re-sorting.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use std::collections::VecDeque;

use crate::generator::{self, SAMPLE_SPACING_SECS};
use crate::parsers::types::{Row, RowSet};

/// Upper bound on rows held by the live buffer
pub const MAX_BUFFER_ROWS: usize = 500;

/// Rows generated when the buffer is first created
pub const INITIAL_BACKFILL_ROWS: usize = 60;

/// Rows appended on every refresh tick
pub const TICK_BATCH_ROWS: usize = 5;

/// Rolling window of live readings, oldest first
#[derive(Clone, Debug)]
pub struct RollingBuffer {
    rows: VecDeque<Row>,
    capacity: usize,
}

impl RollingBuffer {
    /// Create a buffer backfilled with rows ending at `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self::new_with(&mut rand::thread_rng(), now)
    }

    /// Same as [`RollingBuffer::new`] with an explicit random source
    pub fn new_with<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> Self {
        let mut buffer = Self {
            rows: VecDeque::with_capacity(MAX_BUFFER_ROWS),
            capacity: MAX_BUFFER_ROWS,
        };
        buffer.append(generator::generate_with(rng, INITIAL_BACKFILL_ROWS, now));
        buffer
    }

    /// Append a fresh batch ending at `now` (or later, see the module docs),
    /// then drop the oldest overflow
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.tick_with(&mut rand::thread_rng(), now);
    }

    /// Same as [`RollingBuffer::tick`] with an explicit random source
    pub fn tick_with<R: Rng + ?Sized>(&mut self, rng: &mut R, now: NaiveDateTime) {
        let end = self.batch_end(now);
        self.append(generator::generate_with(rng, TICK_BATCH_ROWS, end));
    }

    /// Earliest end time for the next batch that keeps it after the newest row
    fn batch_end(&self, now: NaiveDateTime) -> NaiveDateTime {
        let span = Duration::seconds(SAMPLE_SPACING_SECS * TICK_BATCH_ROWS as i64);
        match self.newest_timestamp() {
            Some(newest) if newest + span > now => {
                tracing::debug!("Tick at {} overlaps buffer, continuing from {}", now, newest);
                newest + span
            }
            _ => now,
        }
    }

    fn newest_timestamp(&self) -> Option<NaiveDateTime> {
        self.rows.back().and_then(|r| r.timestamp)
    }

    /// Append a batch and keep the newest `capacity` rows
    fn append(&mut self, batch: RowSet) {
        self.rows.extend(batch.rows);

        let excess = self.rows.len().saturating_sub(self.capacity);
        if excess > 0 {
            self.rows.drain(..excess);
            tracing::debug!("Rolling buffer dropped {} oldest rows", excess);
        }
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> RowSet {
        RowSet::with_standard_columns(self.rows.iter().cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
