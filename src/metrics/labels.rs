//! Label types for Prometheus metrics

use prometheus_client::encoding::{EncodeLabelSet, EncodeLabelValue};

/// Kind of roster notification
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum EventKind {
    Added,
    Updated,
    Removed,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct EventLabels {
    pub event: EventKind,
}

impl From<EventKind> for EventLabels {
    fn from(event: EventKind) -> Self {
        Self { event }
    }
}
