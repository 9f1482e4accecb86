// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prometheus metrics for roster activity
//!
//! Contains label types and a registry that counts roster notifications and
//! exposes the roster size and readiness as gauges.

mod labels;
mod registry;

/// Roster event kind used as counter label
pub use labels::EventKind;

/// Prometheus roster metrics registry
pub use registry::RosterMetrics;
