// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Roster cache
//!
//! Tracks which friends exist and how much is known about each of them.
//! An entry is announced through [`RosterListener::on_added`] only once its
//! record is complete, later changes are reported as updates, and only
//! announced entries are reported as removed.

mod listener;


use std::fmt::Debug;
use std::hash::Hash;

use indexmap::map::{self, Entry};
use indexmap::{IndexMap, IndexSet};

use crate::error::{AppError, Result};
use crate::record::Record;
use crate::user::UserInfo;

pub use listener::{EventLog, NoopListener, RosterEvent, RosterListener};

/// Roster of friends keyed by numeric account id
pub type FriendsCache<L = NoopListener> = RosterCache<u64, UserInfo, L>;

/// Ordered roster of partially described entities
#[derive(Debug, Clone)]
pub struct RosterCache<K, R = UserInfo, L = NoopListener> {
    entries: IndexMap<K, R>,
    // entries whose record is not complete yet
    pending: usize,
    // set by the first mutating call
    synced: bool,
    listener: L,
}

impl<K, R, L: Default> Default for RosterCache<K, R, L> {
    fn default() -> Self {
        Self::with_listener(L::default())
    }
}

impl<K, R> RosterCache<K, R, NoopListener> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_listener(NoopListener)
    }
}

impl<K, R, L> RosterCache<K, R, L> {
    #[must_use]
    pub fn with_listener(listener: L) -> Self {
        Self {
            entries: IndexMap::new(),
            pending: 0,
            synced: false,
            listener,
        }
    }

    /// Replaces the listener, returning the previous one
    pub fn set_listener(&mut self, listener: L) -> L {
        std::mem::replace(&mut self.listener, listener)
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Returns `true` when every entry is complete.
    ///
    /// A cache that has not seen any mutation yet is never ready.
    pub fn ready(&self) -> bool {
        self.synced && self.pending == 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order, complete or not
    pub fn iter(&self) -> map::Iter<'_, K, R> {
        self.entries.iter()
    }

    pub fn ids(&self) -> map::Keys<'_, K, R> {
        self.entries.keys()
    }
}

impl<K, R, L> RosterCache<K, R, L>
where
    K: Eq + Hash + Clone + Debug,
    R: Record,
    L: RosterListener<K, R>,
{
    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &K) -> Option<&R> {
        self.entries.get(id)
    }

    /// Inserts an empty entry for `id` unless it is already known.
    ///
    /// Never notifies the listener.
    pub fn add(&mut self, id: K) {
        self.synced = true;
        self.insert_empty(id);
    }

    /// Merges `partial` into the record of `id`.
    ///
    /// Notifies `on_added` when the record becomes complete, or `on_updated`
    /// when an already complete record changes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` was never added. The cache is
    /// left untouched in that case.
    pub fn update_info(&mut self, id: &K, partial: R) -> Result<()> {
        let Some(record) = self.entries.get_mut(id) else {
            tracing::warn!("Update for unknown friend {:?} rejected", id);
            return Err(AppError::NotFound(format!("{id:?}")));
        };
        self.synced = true;

        let was_complete = record.is_complete();
        let changed = record.merge(partial);
        let is_complete = record.is_complete();

        match (was_complete, is_complete) {
            (false, true) => {
                self.pending -= 1;
                tracing::debug!("Friend {:?} is now fully known", id);
                self.listener.on_added(id, record);
            }
            (true, true) if changed => {
                tracing::debug!("Friend {:?} updated", id);
                self.listener.on_updated(id, record);
            }
            (true, true) => {
                tracing::trace!("Update for friend {:?} changed nothing", id);
            }
            (true, false) => {
                self.pending += 1;
                tracing::trace!("Friend {:?} lost a required attribute", id);
            }
            (false, false) => {
                tracing::trace!("Friend {:?} still incomplete after update", id);
            }
        }
        Ok(())
    }

    /// Deletes `id` from the roster.
    ///
    /// `on_removed` is only notified if the entry was complete.
    pub fn remove(&mut self, id: &K) {
        self.synced = true;
        match self.entries.shift_remove(id) {
            Some(record) if record.is_complete() => {
                tracing::debug!("Friend {:?} removed", id);
                self.listener.on_removed(id);
            }
            Some(_) => {
                self.pending -= 1;
                tracing::trace!("Dropped incomplete friend {:?}", id);
            }
            None => {
                tracing::trace!("Friend {:?} not in roster, nothing to remove", id);
            }
        }
    }

    /// Resynchronizes the roster with an authoritative list of ids.
    ///
    /// Entries missing from `ids` are removed as by [`remove`](Self::remove),
    /// in roster order. Unknown ids are inserted empty as by
    /// [`add`](Self::add). Entries present in both are kept as they are.
    pub fn reset<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = K>,
    {
        self.synced = true;
        let snapshot: IndexSet<K> = ids.into_iter().collect();
        let before = self.entries.len();

        let listener = &mut self.listener;
        let pending = &mut self.pending;
        self.entries.retain(|id, record| {
            if snapshot.contains(id) {
                return true;
            }
            if record.is_complete() {
                tracing::debug!("Friend {:?} removed by roster reset", id);
                listener.on_removed(id);
            } else {
                *pending -= 1;
            }
            false
        });
        let removed = before - self.entries.len();

        let mut inserted = 0;
        for id in snapshot {
            if self.insert_empty(id) {
                inserted += 1;
            }
        }

        tracing::debug!(
            "Roster reset: {} removed, {} inserted, {} total",
            removed,
            inserted,
            self.entries.len()
        );
    }

    fn insert_empty(&mut self, id: K) -> bool {
        match self.entries.entry(id) {
            Entry::Occupied(entry) => {
                tracing::trace!("Friend {:?} already in roster", entry.key());
                false
            }
            Entry::Vacant(entry) => {
                tracing::trace!("Friend {:?} added to roster", entry.key());
                let record = entry.insert(R::default());
                if !record.is_complete() {
                    self.pending += 1;
                }
                true
            }
        }
    }
}

impl<'a, K, R, L> IntoIterator for &'a RosterCache<K, R, L> {
    type Item = (&'a K, &'a R);
    type IntoIter = map::Iter<'a, K, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
