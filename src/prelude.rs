// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use friends_cache::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// Roster cache
pub use crate::cache::{
    EventLog, FriendsCache, NoopListener, RosterCache, RosterEvent, RosterListener,
};
pub use crate::record::Record;
pub use crate::user::{PersonaState, UserInfo};

// Metrics and scripts
pub use crate::metrics::{EventKind, RosterMetrics};
pub use crate::replay::{Command, Script};
