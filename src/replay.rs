// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Roster scripts
//!
//! A script is a JSON array of roster commands, the same calls a session
//! manager makes while friend list and persona messages arrive:
//!
//! ```json
//! [
//!   {"op": "add", "id": 1423},
//!   {"op": "update", "id": 1423, "info": {"name": "Jan", "state": "Offline"}},
//!   {"op": "reset", "ids": [1423, 1500]},
//!   {"op": "remove", "id": 1500}
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cache::{FriendsCache, RosterListener};
use crate::error::Result;
use crate::user::UserInfo;

/// Single roster mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Add {
        id: u64,
    },
    Update {
        id: u64,
        #[serde(default)]
        info: UserInfo,
    },
    Remove {
        id: u64,
    },
    Reset {
        ids: Vec<u64>,
    },
}

impl Command {
    /// Applies this command to `cache`
    pub fn apply<L>(&self, cache: &mut FriendsCache<L>) -> Result<()>
    where
        L: RosterListener<u64, UserInfo>,
    {
        match self {
            Command::Add { id } => cache.add(*id),
            Command::Update { id, info } => cache.update_info(id, info.clone())?,
            Command::Remove { id } => cache.remove(id),
            Command::Reset { ids } => cache.reset(ids.iter().copied()),
        }
        Ok(())
    }
}

/// Ordered list of roster commands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read roster script {}: {}", path.display(), e);
            e
        })?;
        Self::from_json(&json)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Applies every command in order, stopping at the first failure
    ///
    /// Returns the number of commands applied.
    pub fn apply<L>(&self, cache: &mut FriendsCache<L>) -> Result<usize>
    where
        L: RosterListener<u64, UserInfo>,
    {
        for (index, command) in self.commands.iter().enumerate() {
            tracing::trace!("Applying command {}: {:?}", index, command);
            command.apply(cache).map_err(|e| {
                tracing::warn!("Roster command {} failed: {}", index, e);
                e
            })?;
        }
        Ok(self.commands.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{EventLog, RosterCache, RosterEvent};
    use crate::error::AppError;
    use crate::user::PersonaState;

    #[test]
    fn test_parse_all_commands() {
        let json = r#"[
            {"op": "add", "id": 1},
            {"op": "update", "id": 1, "info": {"name": "Jan"}},
            {"op": "remove", "id": 1},
            {"op": "reset", "ids": [2, 3]}
        ]"#;

        let script = Script::from_json(json).unwrap();
        assert_eq!(
            script.commands(),
            &[
                Command::Add { id: 1 },
                Command::Update {
                    id: 1,
                    info: UserInfo::new().with_name("Jan"),
                },
                Command::Remove { id: 1 },
                Command::Reset { ids: vec![2, 3] },
            ]
        );
    }

    #[test]
    fn test_update_without_info_is_empty_partial() {
        let script = Script::from_json(r#"[{"op": "update", "id": 7}]"#).unwrap();
        assert_eq!(
            script.commands(),
            &[Command::Update {
                id: 7,
                info: UserInfo::default(),
            }]
        );
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let err = Script::from_json(r#"[{"op": "ban", "id": 1}]"#).unwrap_err();
        assert!(matches!(err, AppError::Script(_)));
    }

    #[test]
    fn test_apply_drives_cache() {
        let script = Script::new(vec![
            Command::Add { id: 1423 },
            Command::Update {
                id: 1423,
                info: UserInfo::new().with_name("Jan"),
            },
            Command::Update {
                id: 1423,
                info: UserInfo::new().with_state(PersonaState::Offline),
            },
        ]);
        let mut cache: FriendsCache<EventLog<u64, UserInfo>> =
            RosterCache::with_listener(EventLog::new());

        assert_eq!(script.apply(&mut cache).unwrap(), 3);
        assert!(cache.ready());
        assert_eq!(
            cache.listener().events(),
            &[RosterEvent::Added(
                1423,
                UserInfo::new()
                    .with_name("Jan")
                    .with_state(PersonaState::Offline)
            )]
        );
    }

    #[test]
    fn test_apply_stops_at_first_failure() {
        let script = Script::new(vec![
            Command::Add { id: 1 },
            Command::Update {
                id: 2,
                info: UserInfo::new().with_name("Ula"),
            },
            Command::Add { id: 3 },
        ]);
        let mut cache = FriendsCache::new();

        let err = script.apply(&mut cache).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(cache.contains(&1));
        assert!(!cache.contains(&3));
    }

    #[test]
    fn test_missing_file() {
        let err = Script::from_file("/nonexistent/roster.json").unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
