// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Friends Cache
//!
//! In-memory roster of friends whose attributes arrive piecemeal.
//!
//! Each friend is first known only by id and becomes usable once every
//! tracked attribute has been received. The cache turns the incremental
//! stream of ids and partial records into added, updated and removed
//! notifications, and can be resynchronized against a full friend list.
//!
//! ## Main modules
//! - `cache`: roster state machine and listener interface
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: Prometheus metrics for roster activity
//! - `record`: partial attribute records
//! - `replay`: JSON roster scripts
//! - `user`: friend attribute record
//! - `prelude`: commonly used types and traits

mod cache;
mod config;
mod error;
mod metrics;
mod record;
mod replay;
mod user;
pub mod prelude;

// Re-export commonly used types
/// Roster cache and listener interface
pub use cache::{EventLog, FriendsCache, NoopListener, RosterCache, RosterEvent, RosterListener};

/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// Roster metrics
pub use metrics::{EventKind, RosterMetrics};

/// Attribute records
pub use record::Record;
pub use user::{PersonaState, UserInfo};

/// Roster scripts
pub use replay::{Command, Script};
