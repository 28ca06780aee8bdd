//! Cached access to daily schedules.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::core::{CacheStatus, ScheduleCache, ScheduleCacheKey};
use crate::nba::{http::ScheduleClient, types::GameMatchup};
use crate::Result;

/// Try the cache first. If missing or `refresh == true`, fetch from the API
/// and write the result back. Empty days are never cached, so a day that
/// failed or had no data yet is retried next time.
pub async fn load_or_fetch_games(
    client: &ScheduleClient,
    cache: &ScheduleCache,
    day: NaiveDate,
    refresh: bool,
) -> Result<(Vec<GameMatchup>, CacheStatus)> {
    let key = ScheduleCacheKey { day };

    if !refresh {
        if let Some(games) = cache.get(&key) {
            debug!("schedule for {} served from cache", day);
            return Ok((games, CacheStatus::Hit));
        }
    }

    let games = client.games_for_date(day).await?;

    if !games.is_empty() {
        if let Err(e) = cache.put(key, games.clone()) {
            warn!("could not write schedule cache for {}: {}", day, e);
        }
    }

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((games, status))
}

/// Like [`load_or_fetch_games`], but any failure is reported and treated as
/// a day without games.
pub async fn games_or_empty(
    client: &ScheduleClient,
    cache: &ScheduleCache,
    day: NaiveDate,
    refresh: bool,
) -> (Vec<GameMatchup>, Option<CacheStatus>) {
    match load_or_fetch_games(client, cache, day, refresh).await {
        Ok((games, status)) => (games, Some(status)),
        Err(e) => {
            warn!("could not load games for {}: {}", day, e);
            (Vec::new(), None)
        }
    }
}
