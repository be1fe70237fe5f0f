//! Ordered read views over the tracker's keys.
//!
//! A view is a snapshot of the keys in one state, sorted by the timestamp
//! of their last transition. Timestamps are unique, so the order is total.
//!
//! Complexity:
//! - build: O(n log n) over the matching items
//! - next: O(1)

use std::cmp::Reverse;
use std::hash::Hash;
use std::iter::FusedIterator;

use rustc_hash::FxHashMap;

use super::clock::Timestamp;
use super::item::Status;

/// Which end of the timeline a view starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recency {
    /// Most recently changed first.
    NewestFirst,
    /// Least recently changed first.
    OldestFirst,
}

/// An ordered iterator over tracked keys.
///
/// Cloning the iterator restarts it from the clone's position without
/// touching the tracker; asking the tracker for a new view re-reads it.
#[derive(Debug)]
pub struct Keys<'a, K> {
    keys: std::vec::IntoIter<&'a K>,
}

impl<K> Clone for Keys<'_, K> {
    fn clone(&self) -> Self {
        return Keys { keys: self.keys.clone() };
    }
}

impl<'a, K: Eq + Hash> Keys<'a, K> {
    /// Collect the keys whose `deleted` flag matches, in the given order.
    pub(crate) fn select(
        items: &'a FxHashMap<K, Status>,
        deleted: bool,
        recency: Recency,
    ) -> Keys<'a, K> {
        let mut stamped: Vec<(Timestamp, &'a K)> = items
            .iter()
            .filter(|(_, status)| status.deleted == deleted)
            .map(|(key, status)| (status.updated_at, key))
            .collect();

        match recency {
            Recency::NewestFirst => stamped.sort_unstable_by_key(|&(at, _)| Reverse(at)),
            Recency::OldestFirst => stamped.sort_unstable_by_key(|&(at, _)| at),
        }

        let keys: Vec<&'a K> = stamped.into_iter().map(|(_, key)| key).collect();
        return Keys { keys: keys.into_iter() };
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<&'a K> {
        return self.keys.next();
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        return self.keys.size_hint();
    }
}

impl<K> DoubleEndedIterator for Keys<'_, K> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        return self.keys.next_back();
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {}

impl<K> FusedIterator for Keys<'_, K> {}
