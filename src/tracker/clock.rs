//! Logical clock for stamping item transitions.
//!
//! # Atomic Clock
//!
//! A monotonic counter owned by one tracker. Every call to `tick` returns a
//! value strictly greater than every value returned before it, including
//! when several threads tick the same clock at once: the increment is a
//! single `fetch_add`, never a load followed by a store.
//!
//! Complexity:
//! - tick: O(1)
//! - time: O(1)

use std::sync::atomic::{AtomicU64, Ordering};

/// A logical timestamp. Used for recency ordering, not wall-clock time.
pub type Timestamp = u64;

/// A monotonic logical clock safe to tick from concurrent callers.
#[derive(Debug, Default)]
pub struct AtomicClock {
    time: AtomicU64,
}

impl AtomicClock {
    /// Create a new clock starting at 0. The first tick returns 1.
    pub fn new() -> AtomicClock {
        return AtomicClock { time: AtomicU64::new(0) };
    }

    /// Create a clock whose next tick returns `time + 1`.
    pub fn with_time(time: Timestamp) -> AtomicClock {
        return AtomicClock { time: AtomicU64::new(time) };
    }

    /// The most recently issued timestamp, or 0 if none was issued.
    #[inline]
    pub fn time(&self) -> Timestamp {
        return self.time.load(Ordering::Acquire);
    }

    /// Issue a fresh timestamp.
    #[inline]
    pub fn tick(&self) -> Timestamp {
        return self.time.fetch_add(1, Ordering::AcqRel) + 1;
    }
}
