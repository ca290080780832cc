//! Tests for the live rolling buffer

use chrono::Duration;
use streamdash::buffer::{RollingBuffer, INITIAL_BACKFILL_ROWS, MAX_BUFFER_ROWS, TICK_BATCH_ROWS};

use crate::common::{fixed_time, seeded};

#[test]
fn test_constants() {
    assert_eq!(MAX_BUFFER_ROWS, 500);
    assert_eq!(INITIAL_BACKFILL_ROWS, 60);
    assert_eq!(TICK_BATCH_ROWS, 5);
}

#[test]
fn test_size_after_k_ticks() {
    let mut rng = seeded(100);
    let mut buffer = RollingBuffer::new_with(&mut rng, fixed_time());
    assert_eq!(buffer.len(), 60);

    for k in 1..=150usize {
        buffer.tick_with(&mut rng, fixed_time() + Duration::seconds(10 * k as i64));
        assert_eq!(buffer.len(), (60 + 5 * k).min(500), "k={}", k);
        assert!(buffer.len() <= MAX_BUFFER_ROWS);
    }
}

#[test]
fn test_init_then_three_ticks_is_75() {
    let mut buffer = RollingBuffer::new(fixed_time());
    for k in 1..=3 {
        buffer.tick(fixed_time() + Duration::seconds(10 * k));
    }
    assert_eq!(buffer.len(), 75);
}

#[test]
fn test_full_buffer_drops_five_oldest() {
    let mut rng = seeded(7);
    let mut buffer = RollingBuffer::new_with(&mut rng, fixed_time());
    let mut k = 0i64;
    while buffer.len() < MAX_BUFFER_ROWS {
        k += 1;
        buffer.tick_with(&mut rng, fixed_time() + Duration::seconds(10 * k));
    }

    let before = buffer.snapshot();
    buffer.tick_with(&mut rng, fixed_time() + Duration::seconds(10 * (k + 1)));
    let after = buffer.snapshot();

    assert_eq!(after.len(), 500);
    assert_eq!(&after.rows[..495], &before.rows[5..]);
}
