//! A tracker handle that can be shared across threads.
//!
//! Mutations hold the write guard for their whole duration, so readers
//! never observe a half-applied reconciliation. Reads take the shared
//! guard and hand back owned snapshots, since a borrowed view cannot
//! outlive the guard.
//!
//! A panic while a guard is held poisons the lock. Every mutation leaves
//! each item in a consistent state, so a poisoned tracker is still valid
//! and is used as is.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;

use super::clock::Timestamp;
use super::item::Status;
use super::{Reconciled, Tracker};

/// A cloneable, thread-safe handle to one tracker.
#[derive(Debug)]
pub struct SharedTracker<K> {
    inner: Arc<RwLock<Tracker<K>>>,
}

impl<K> Clone for SharedTracker<K> {
    fn clone(&self) -> Self {
        return SharedTracker { inner: Arc::clone(&self.inner) };
    }
}

impl<K: Eq + Hash> Default for SharedTracker<K> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<K: Eq + Hash> From<Tracker<K>> for SharedTracker<K> {
    fn from(tracker: Tracker<K>) -> Self {
        return SharedTracker { inner: Arc::new(RwLock::new(tracker)) };
    }
}

impl<K: Eq + Hash> SharedTracker<K> {
    pub fn new() -> SharedTracker<K> {
        return SharedTracker::from(Tracker::new());
    }

    fn read(&self) -> RwLockReadGuard<'_, Tracker<K>> {
        return self.inner.read().unwrap_or_else(PoisonError::into_inner);
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tracker<K>> {
        return self.inner.write().unwrap_or_else(PoisonError::into_inner);
    }

    /// Run `f` against the tracker under the shared guard.
    pub fn with<R>(&self, f: impl FnOnce(&Tracker<K>) -> R) -> R {
        return f(&self.read());
    }

    /// Run `f` against the tracker under the exclusive guard.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Tracker<K>) -> R) -> R {
        return f(&mut self.write());
    }

    pub fn now(&self) -> Timestamp {
        return self.read().now();
    }

    pub fn contains(&self, key: &K) -> bool {
        return self.read().contains(key);
    }

    pub fn status(&self, key: &K) -> Option<Status> {
        return self.read().status(key);
    }

    pub fn len(&self) -> usize {
        return self.read().len();
    }

    pub fn is_empty(&self) -> bool {
        return self.read().is_empty();
    }

    pub fn add(&self, key: K) -> bool {
        return self.write().add(key);
    }

    /// See [`Tracker::set_active_items`]. Readers see either none or all of it.
    pub fn set_active_items<I>(&self, keys: I) -> Reconciled
    where
        I: IntoIterator<Item = K>,
    {
        return self.write().set_active_items(keys);
    }
}

impl<K: Eq + Hash + Debug> SharedTracker<K> {
    pub fn try_add(&self, key: K) -> Result<()> {
        return self.write().try_add(key);
    }

    pub fn update(&self, key: &K) -> Result<()> {
        return self.write().update(key);
    }

    pub fn delete(&self, key: &K) -> Result<()> {
        return self.write().delete(key);
    }
}

impl<K: Eq + Hash + Clone> SharedTracker<K> {
    /// Snapshot of the active keys, most recently activated first.
    pub fn active_items(&self) -> Vec<K> {
        return self.read().active_items().cloned().collect();
    }

    /// Snapshot of the deleted keys, least recently deleted first.
    pub fn deleted_items(&self) -> Vec<K> {
        return self.read().deleted_items().cloned().collect();
    }
}
