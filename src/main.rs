// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use friends_cache::{
    Config, EventLog, FriendsCache, Result, RosterCache, RosterEvent, RosterMetrics, Script,
    UserInfo,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type ReplayCache = FriendsCache<(EventLog<u64, UserInfo>, RosterMetrics)>;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    setup_tracing();

    // The first argument overrides ROSTER_SCRIPT
    let config = Config::from_env().with_script_path(std::env::args().nth(1));
    config.validate().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    let script = Script::from_file(&config.script_path)?;
    tracing::info!(
        "Loaded {} roster command(s) from {}",
        script.len(),
        config.script_path
    );

    let mut cache: ReplayCache =
        RosterCache::with_listener((EventLog::new(), RosterMetrics::new()));
    let outcome = script.apply(&mut cache);

    // Log whatever happened before a failing command too
    for event in cache.listener_mut().0.take() {
        match event {
            RosterEvent::Added(id, info) => {
                tracing::info!("Friend added: {} {}", id, describe(&info));
            }
            RosterEvent::Updated(id, info) => {
                tracing::info!("Friend updated: {} {}", id, describe(&info));
            }
            RosterEvent::Removed(id) => tracing::info!("Friend removed: {}", id),
        }
    }
    outcome?;

    tracing::info!(
        "Roster holds {} friend(s), ready: {}",
        cache.len(),
        cache.ready()
    );
    for (id, info) in &cache {
        tracing::debug!("  - {} {}", id, describe(info));
    }

    if config.dump_metrics {
        let metrics = &cache.listener().1;
        metrics.observe(&cache);
        print!("{}", metrics.encode_metrics()?);
    }

    Ok(())
}

fn describe(info: &UserInfo) -> String {
    let name = info.name.as_deref().unwrap_or("<unknown>");
    match info.state {
        Some(state) => format!("'{name}' ({state:?})"),
        None => format!("'{name}'"),
    }
}

fn setup_tracing() {
    // RUST_LOG wins, "info" otherwise
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
