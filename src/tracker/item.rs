//! Per-key state stored by the tracker.
//!
//! The key itself lives in the tracker's index, so an item is only its
//! soft-delete flag plus the timestamp of the transition that put it into
//! its current state. Both fields change together or not at all.

use super::clock::{AtomicClock, Timestamp};

/// The current state of one tracked key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Status {
    /// Whether the item is soft-deleted.
    pub deleted: bool,
    /// When the item entered its current state.
    pub updated_at: Timestamp,
}

impl Status {
    /// A freshly added, active item.
    pub fn created(at: Timestamp) -> Status {
        return Status { deleted: false, updated_at: at };
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        return !self.deleted;
    }

    /// Move a deleted item back to active, stamping it from `clock`.
    ///
    /// Returns false, leaving the item and the clock untouched, if it was
    /// already active.
    #[inline]
    pub fn restore(&mut self, clock: &AtomicClock) -> bool {
        if !self.deleted {
            return false;
        }
        self.deleted = false;
        self.updated_at = clock.tick();
        return true;
    }

    /// Soft-delete an active item, stamping it from `clock`.
    ///
    /// Returns false if it was already deleted.
    #[inline]
    pub fn delete(&mut self, clock: &AtomicClock) -> bool {
        if self.deleted {
            return false;
        }
        self.deleted = true;
        self.updated_at = clock.tick();
        return true;
    }
}
