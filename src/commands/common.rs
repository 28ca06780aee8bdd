//! Common utilities and helper functions shared across commands.

use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::{
    cli::types::{parse_day, RunId},
    core::{cache::UnifiedCache, cache_root, default_picks_path, CacheStatus, ScheduleCache},
    nba::{http::ScheduleClient, schedule::games_or_empty, GameMatchup},
    storage::PickStore,
};

/// Schedule days kept in memory per process
const SCHEDULE_MEMORY_CAPACITY: usize = 32;

/// Resources shared by the commands
pub struct CommandContext {
    pub store: PickStore,
    /// `None` when the HTTP client could not be set up; every day then has no games
    pub client: Option<ScheduleClient>,
    pub cache: ScheduleCache,
    pub today: NaiveDate,
    pub verbose: bool,
}

impl CommandContext {
    /// Load the pick log and set up the schedule client and cache.
    ///
    /// Commands that only read or edit the log never depend on the schedule
    /// source, so a client that fails to build is logged and left out.
    pub fn new(picks_file: Option<PathBuf>, verbose: bool) -> Self {
        let path = picks_file.unwrap_or_else(default_picks_path);
        info!("loading picks from {}", path.display());
        let store = PickStore::load(path);

        let client = match ScheduleClient::from_env() {
            Ok(client) => {
                debug!("schedule source {}", client.base_url());
                Some(client)
            }
            Err(e) => {
                warn!("schedule source unavailable: {}", e);
                None
            }
        };

        Self {
            store,
            client,
            cache: UnifiedCache::new(SCHEDULE_MEMORY_CAPACITY, cache_root()),
            today: chrono::Local::now().date_naive(),
            verbose,
        }
    }

    /// Fetch a day's games; failures count as a day without games
    pub async fn games_for(&self, day: NaiveDate, refresh: bool) -> Vec<GameMatchup> {
        let (games, status) = match &self.client {
            Some(client) => games_or_empty(client, &self.cache, day, refresh).await,
            None => (Vec::new(), None),
        };
        if self.verbose {
            match status {
                Some(CacheStatus::Hit) => eprintln!("✓ Schedule for {} loaded (from cache)", day),
                Some(CacheStatus::Miss) => eprintln!("✓ Schedule for {} fetched (cache miss)", day),
                Some(CacheStatus::Refreshed) => {
                    eprintln!("✓ Schedule for {} fetched (refreshed)", day)
                }
                None => eprintln!("⚠ Could not load the schedule for {}", day),
            }
        }
        games
    }
}

/// The requested run, or the latest run in the log
pub fn resolve_run(store: &PickStore, run: Option<RunId>) -> RunId {
    run.unwrap_or_else(|| store.latest_run())
}

/// The requested day, or `today` when absent or unreadable
pub fn resolve_day(day: Option<&str>, today: NaiveDate) -> NaiveDate {
    match day {
        Some(raw) => parse_day(raw).unwrap_or_else(|e| {
            warn!("{}; using {} instead", e, today);
            today
        }),
        None => today,
    }
}

/// ISO form used for pick dates
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}
