// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Roster change notifications

/// Observer of roster transitions
///
/// Handlers run synchronously from inside the cache operation that caused
/// them and must not call back into the cache.
pub trait RosterListener<K, R> {
    /// The entity just became fully described.
    fn on_added(&mut self, _id: &K, _record: &R) {}

    /// A fully described entity changed at least one attribute.
    fn on_updated(&mut self, _id: &K, _record: &R) {}

    /// A previously announced entity left the roster.
    fn on_removed(&mut self, _id: &K) {}
}

/// Listener that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl<K, R> RosterListener<K, R> for NoopListener {}

impl<K, R, L: RosterListener<K, R> + ?Sized> RosterListener<K, R> for &mut L {
    fn on_added(&mut self, id: &K, record: &R) {
        (**self).on_added(id, record);
    }

    fn on_updated(&mut self, id: &K, record: &R) {
        (**self).on_updated(id, record);
    }

    fn on_removed(&mut self, id: &K) {
        (**self).on_removed(id);
    }
}

impl<K, R, A, B> RosterListener<K, R> for (A, B)
where
    A: RosterListener<K, R>,
    B: RosterListener<K, R>,
{
    fn on_added(&mut self, id: &K, record: &R) {
        self.0.on_added(id, record);
        self.1.on_added(id, record);
    }

    fn on_updated(&mut self, id: &K, record: &R) {
        self.0.on_updated(id, record);
        self.1.on_updated(id, record);
    }

    fn on_removed(&mut self, id: &K) {
        self.0.on_removed(id);
        self.1.on_removed(id);
    }
}

/// Single roster notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent<K, R> {
    Added(K, R),
    Updated(K, R),
    Removed(K),
}

/// Listener that records every notification in order
#[derive(Debug, Clone)]
pub struct EventLog<K, R> {
    events: Vec<RosterEvent<K, R>>,
}

impl<K, R> Default for EventLog<K, R> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<K, R> EventLog<K, R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RosterEvent<K, R>] {
        &self.events
    }

    /// Returns recorded events and clears the log
    pub fn take(&mut self) -> Vec<RosterEvent<K, R>> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<K: Clone, R: Clone> RosterListener<K, R> for EventLog<K, R> {
    fn on_added(&mut self, id: &K, record: &R) {
        self.events.push(RosterEvent::Added(id.clone(), record.clone()));
    }

    fn on_updated(&mut self, id: &K, record: &R) {
        self.events
            .push(RosterEvent::Updated(id.clone(), record.clone()));
    }

    fn on_removed(&mut self, id: &K) {
        self.events.push(RosterEvent::Removed(id.clone()));
    }
}
