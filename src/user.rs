// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Friend attribute record

use serde::{Deserialize, Serialize};

use crate::record::{Record, merge_field};

/// Online status of a friend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonaState {
    Offline = 0,
    Online = 1,
    Busy = 2,
    Away = 3,
    Snooze = 4,
    LookingToTrade = 5,
    LookingToPlay = 6,
    Invisible = 7,
}

impl TryFrom<u32> for PersonaState {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Offline),
            1 => Ok(Self::Online),
            2 => Ok(Self::Busy),
            3 => Ok(Self::Away),
            4 => Ok(Self::Snooze),
            5 => Ok(Self::LookingToTrade),
            6 => Ok(Self::LookingToPlay),
            7 => Ok(Self::Invisible),
            other => Err(other),
        }
    }
}

/// Partially known attributes of a friend
///
/// Every field starts unset. A record is complete once both the display name
/// and the persona state have been received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PersonaState>,
}

impl UserInfo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: PersonaState) -> Self {
        self.state = Some(state);
        self
    }
}

impl Record for UserInfo {
    fn merge(&mut self, partial: Self) -> bool {
        let name_changed = merge_field(&mut self.name, partial.name);
        let state_changed = merge_field(&mut self.state, partial.state);
        name_changed || state_changed
    }

    fn is_complete(&self) -> bool {
        self.name.is_some() && self.state.is_some()
    }
}
