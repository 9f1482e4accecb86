// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry fed by roster notifications

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;

use crate::cache::{RosterCache, RosterListener};
use crate::error::Result;
use crate::metrics::labels::{EventKind, EventLabels};

/// Roster metrics
///
/// Counts notifications when installed as a cache listener. Gauges are
/// refreshed explicitly through [`RosterMetrics::observe`] because the
/// listener is not told about incomplete entries.
pub struct RosterMetrics {
    registry: Registry,
    events: Family<EventLabels, Counter>,
    entries: Gauge,
    ready: Gauge,
}

impl RosterMetrics {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let events = Family::<EventLabels, Counter>::default();
        registry.register(
            "friends_cache_events",
            "Roster notifications by kind",
            events.clone(),
        );
        let entries = Gauge::default();
        registry.register(
            "friends_cache_entries",
            "Entries in the roster, complete or not",
            entries.clone(),
        );
        let ready = Gauge::default();
        registry.register(
            "friends_cache_ready",
            "Roster readiness (1=every entry complete,0=otherwise)",
            ready.clone(),
        );

        // Counters exist from the start so rates are defined before the first event
        for kind in [EventKind::Added, EventKind::Updated, EventKind::Removed] {
            let _ = events.get_or_create(&kind.into());
        }

        Self {
            registry,
            events,
            entries,
            ready,
        }
    }

    /// Copies roster size and readiness from `cache` into the gauges
    pub fn observe<K, R, L>(&self, cache: &RosterCache<K, R, L>) {
        #[allow(clippy::cast_possible_wrap)]
        self.entries.set(cache.len() as i64);
        self.ready.set(i64::from(cache.ready()));
    }

    pub fn event_count(&self, kind: EventKind) -> u64 {
        self.events.get_or_create(&kind.into()).get()
    }

    pub fn encode_metrics(&self) -> Result<String> {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry)?;
        Ok(buffer)
    }

    fn record(&self, kind: EventKind) {
        self.events.get_or_create(&kind.into()).inc();
    }
}

impl Default for RosterMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RosterMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterMetrics")
            .field("added", &self.event_count(EventKind::Added))
            .field("updated", &self.event_count(EventKind::Updated))
            .field("removed", &self.event_count(EventKind::Removed))
            .field("entries", &self.entries.get())
            .field("ready", &self.ready.get())
            .finish()
    }
}

impl<K, R> RosterListener<K, R> for RosterMetrics {
    fn on_added(&mut self, _id: &K, _record: &R) {
        self.record(EventKind::Added);
    }

    fn on_updated(&mut self, _id: &K, _record: &R) {
        self.record(EventKind::Updated);
    }

    fn on_removed(&mut self, _id: &K) {
        self.record(EventKind::Removed);
    }
}
