//! The item tracker: soft-deletable keys stamped with logical time.
//!
//! Every key the tracker has seen stays in its index forever; deletion is
//! a flag. Each transition into the active or deleted state takes a fresh
//! timestamp from the tracker's clock, which gives the two read views their
//! order.
//!
//! Complexity:
//! - add / update / delete / contains: O(1) expected
//! - set_active_items: O(t + n) expected, t target keys, n tracked items
//! - active_items / deleted_items: O(n log n) to build, O(1) per key

pub mod clock;
pub mod item;
pub mod shared;
pub mod view;

use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::error::{Result, TrackerError};

pub use clock::{AtomicClock, Timestamp};
pub use item::Status;
pub use shared::SharedTracker;
pub use view::{Keys, Recency};

/// Counts of the transitions applied by one reconciliation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reconciled {
    /// Target keys the tracker had never seen.
    pub added: usize,
    /// Target keys that were deleted and are active again.
    pub restored: usize,
    /// Active keys missing from the target that were deleted.
    pub deleted: usize,
}

impl Reconciled {
    /// True if the reconciliation changed nothing.
    pub fn is_noop(&self) -> bool {
        return self.added == 0 && self.restored == 0 && self.deleted == 0;
    }
}

/// A set of unique keys, each active or soft-deleted.
#[derive(Debug)]
pub struct Tracker<K> {
    items: FxHashMap<K, Status>,
    clock: AtomicClock,
}

impl<K: Eq + Hash> Default for Tracker<K> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<K: Eq + Hash> Tracker<K> {
    /// Create an empty tracker.
    pub fn new() -> Tracker<K> {
        return Tracker {
            items: FxHashMap::default(),
            clock: AtomicClock::new(),
        };
    }

    /// Create an empty tracker with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Tracker<K> {
        return Tracker {
            items: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            clock: AtomicClock::new(),
        };
    }

    /// Issue a fresh timestamp, greater than every one issued before.
    #[inline]
    pub fn now(&self) -> Timestamp {
        return self.clock.tick();
    }

    /// Whether the tracker has ever seen `key`, active or deleted.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        return self.items.contains_key(key);
    }

    /// The current state of `key`, if tracked.
    #[inline]
    pub fn status(&self, key: &K) -> Option<Status> {
        return self.items.get(key).copied();
    }

    /// Number of tracked keys, active and deleted.
    #[inline]
    pub fn len(&self) -> usize {
        return self.items.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.items.is_empty();
    }

    pub fn active_len(&self) -> usize {
        return self.items.values().filter(|status| status.is_active()).count();
    }

    pub fn deleted_len(&self) -> usize {
        return self.items.values().filter(|status| status.deleted).count();
    }

    /// Insert `key` as a new active item.
    ///
    /// Returns false, changing nothing, if the key is already tracked in
    /// either state.
    pub fn add(&mut self, key: K) -> bool {
        match self.items.entry(key) {
            Entry::Occupied(_) => return false,
            Entry::Vacant(slot) => {
                slot.insert(Status::created(self.clock.tick()));
                return true;
            }
        }
    }

    /// Active keys, most recently activated first.
    pub fn active_items(&self) -> Keys<'_, K> {
        return Keys::select(&self.items, false, Recency::NewestFirst);
    }

    /// Deleted keys, least recently deleted first.
    pub fn deleted_items(&self) -> Keys<'_, K> {
        return Keys::select(&self.items, true, Recency::OldestFirst);
    }

    /// Make the active set exactly `keys`.
    ///
    /// Active items missing from `keys` are deleted first. Then, in input
    /// order, unknown keys are added and deleted keys are restored. Keys
    /// that are already active keep their timestamp, and repeated keys are
    /// applied once.
    pub fn set_active_items<I>(&mut self, keys: I) -> Reconciled
    where
        I: IntoIterator<Item = K>,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        let mut report = Reconciled::default();

        {
            let target: FxHashSet<&K> = keys.iter().collect();
            for (key, status) in self.items.iter_mut() {
                if !target.contains(key) && status.delete(&self.clock) {
                    report.deleted += 1;
                }
            }
        }

        let requested = keys.len();
        for key in keys {
            match self.items.entry(key) {
                Entry::Occupied(mut slot) => {
                    if slot.get_mut().restore(&self.clock) {
                        report.restored += 1;
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(Status::created(self.clock.tick()));
                    report.added += 1;
                }
            }
        }

        debug!(
            requested,
            added = report.added,
            restored = report.restored,
            deleted = report.deleted,
            "reconciled active items"
        );
        return report;
    }
}

impl<K: Eq + Hash + Debug> Tracker<K> {
    /// Insert `key` as a new active item, failing if it is already tracked.
    pub fn try_add(&mut self, key: K) -> Result<()> {
        match self.items.entry(key) {
            Entry::Occupied(slot) => return Err(TrackerError::duplicate_key(slot.key())),
            Entry::Vacant(slot) => {
                let at = self.clock.tick();
                trace!(key = ?slot.key(), at, "added");
                slot.insert(Status::created(at));
                return Ok(());
            }
        }
    }

    /// Restore a deleted key. Already active keys are left untouched.
    pub fn update(&mut self, key: &K) -> Result<()> {
        let status = self.items.get_mut(key).ok_or_else(|| TrackerError::not_found(key))?;
        if status.restore(&self.clock) {
            trace!(?key, at = status.updated_at, "restored");
        }
        return Ok(());
    }

    /// Soft-delete an active key. Already deleted keys are left untouched.
    pub fn delete(&mut self, key: &K) -> Result<()> {
        let status = self.items.get_mut(key).ok_or_else(|| TrackerError::not_found(key))?;
        if status.delete(&self.clock) {
            trace!(?key, at = status.updated_at, "deleted");
        }
        return Ok(());
    }
}
