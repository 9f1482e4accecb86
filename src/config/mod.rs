// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the roster replay binary
//!
//! Loads configuration from environment variables and an optional `.env` file.

#[cfg(test)]
mod tests;

use crate::error::{AppError, Result};

/// Environment variable names used by the application
pub mod env_vars {
    pub const ROSTER_SCRIPT: &str = "ROSTER_SCRIPT";
    pub const ROSTER_DUMP_METRICS: &str = "ROSTER_DUMP_METRICS";
}

/// Application-wide configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to the JSON roster script to replay
    pub script_path: String,
    /// Print encoded metrics after the replay
    pub dump_metrics: bool,
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let script_path = std::env::var(env_vars::ROSTER_SCRIPT).unwrap_or_default();
        let dump_metrics = std::env::var(env_vars::ROSTER_DUMP_METRICS)
            .ok()
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Config {
            script_path,
            dump_metrics,
        }
    }

    /// Overrides the script path when one is given
    #[must_use]
    pub fn with_script_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.script_path = path;
        }
        self
    }

    /// Validates configuration
    pub fn validate(&self) -> Result<()> {
        if self.script_path.trim().is_empty() {
            return Err(AppError::Config(format!(
                "no roster script given: pass a path or set {}",
                env_vars::ROSTER_SCRIPT
            )));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "" | "0" | "false" | "no" | "off" => false,
        other => {
            tracing::warn!(
                "Unrecognized value '{}' for {}, using false",
                other,
                env_vars::ROSTER_DUMP_METRICS
            );
            false
        }
    }
}
