//! Pick validation: the ordered checks that guard `PickStore::save`.

use crate::cli::types::RunId;
use crate::error::{PickRejection, Result};
use crate::nba::{team_key, GameMatchup};
use crate::storage::{PickRecord, PickStore};
use tracing::info;

/// Check whether `team` may be picked for `date` in `run`.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. a team was given
/// 2. the team plays on that day
/// 3. the run has no pick for that day yet
/// 4. the team has not been used in the run
pub fn validate_pick(
    store: &PickStore,
    games: &[GameMatchup],
    team: &str,
    date: &str,
    run: RunId,
) -> std::result::Result<(), PickRejection> {
    let team = team.trim();
    if team.is_empty() {
        return Err(PickRejection::NoTeamSelected);
    }
    if !games.iter().any(|g| g.involves(team)) {
        return Err(PickRejection::TeamNotPlaying {
            team: team.to_string(),
        });
    }
    if store.has_pick_on_date(date, run) {
        return Err(PickRejection::DateAlreadyPicked {
            date: date.to_string(),
            run,
        });
    }
    if store.already_picked(team, run) {
        return Err(PickRejection::TeamAlreadyUsed {
            team: team.to_string(),
            run,
        });
    }
    Ok(())
}

/// Validate and, if accepted, record the pick.
///
/// Returns the stored record. Rejections leave the store untouched and come
/// back as `StreakError::Rejected`.
pub fn submit_pick(
    store: &mut PickStore,
    games: &[GameMatchup],
    team: &str,
    date: &str,
    run: RunId,
) -> Result<PickRecord> {
    validate_pick(store, games, team, date, run)?;

    let team = team.trim();
    store.save(team, date, run)?;
    info!("saved pick {} for {} in run {}", team, date, run);

    Ok(PickRecord::new(date, team, run))
}

/// Map user input onto the scheduled team name it refers to, folding case
/// the same way reuse detection does. Unknown input is returned trimmed, unchanged.
pub fn canonical_team_name(games: &[GameMatchup], input: &str) -> String {
    let wanted = team_key(input);
    games
        .iter()
        .flat_map(|g| [g.home.as_str(), g.visitor.as_str()])
        .find(|name| team_key(name) == wanted)
        .unwrap_or(input.trim())
        .to_string()
}
