//! "Smart picks": a small, deterministic ranking of today's unused teams.

use crate::nba::{team_key, teams::StrengthTable, GameMatchup};
use serde::Serialize;
use std::collections::HashSet;

/// Most suggestions returned for one day.
pub const MAX_SUGGESTIONS: usize = 3;

pub const HOME_BONUS: i32 = 5;
pub const CLEAR_EDGE_BONUS: i32 = 4;
pub const SLIGHT_EDGE_BONUS: i32 = 2;

const CLEAR_EDGE_MIN: i32 = 8;
const SLIGHT_EDGE_MIN: i32 = 3;
const UNDERDOG_MAX: i32 = -5;

/// One suggested pick and the rules that produced its score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub team: String,
    pub opponent: String,
    pub home: bool,
    pub score: i32,
    pub reasons: Vec<String>,
}

/// Score one side of a matchup.
pub fn score_candidate(
    team: &str,
    opponent: &str,
    home: bool,
    strengths: &StrengthTable,
) -> Suggestion {
    let own = strengths.strength(team);
    let other = strengths.strength(opponent);
    let diff = own - other;

    let mut score = own;
    let mut reasons = vec![format!("Strength rating {own} vs {other}")];

    if home {
        score += HOME_BONUS;
        reasons.push(format!("Home game (+{HOME_BONUS})"));
    }

    if diff >= CLEAR_EDGE_MIN {
        score += CLEAR_EDGE_BONUS;
        reasons.push(format!("Clearly stronger by {diff} (+{CLEAR_EDGE_BONUS})"));
    } else if diff >= SLIGHT_EDGE_MIN {
        score += SLIGHT_EDGE_BONUS;
        reasons.push(format!("Slightly stronger by {diff} (+{SLIGHT_EDGE_BONUS})"));
    } else if diff <= UNDERDOG_MAX {
        reasons.push(format!("Underdog by {}, risky pick", -diff));
    }

    Suggestion {
        team: team.to_string(),
        opponent: opponent.to_string(),
        home,
        score,
        reasons,
    }
}

/// Rank the day's candidates.
///
/// `used_teams` holds [`team_key`] forms of names already picked in the run. Returns
/// nothing once the day already has a pick. Ties keep the order candidates
/// were seen in: games in schedule order, home side before visitor.
pub fn recommend(
    games: &[GameMatchup],
    used_teams: &HashSet<String>,
    strengths: &StrengthTable,
    picked_today: bool,
) -> Vec<Suggestion> {
    if picked_today {
        return Vec::new();
    }

    let mut candidates: Vec<Suggestion> = games
        .iter()
        .flat_map(|g| [(&g.home, &g.visitor, true), (&g.visitor, &g.home, false)])
        .filter(|(team, _, _)| !used_teams.contains(&team_key(team)))
        .map(|(team, opponent, home)| score_candidate(team, opponent, home, strengths))
        .collect();

    // sort_by is stable, which keeps encounter order on equal scores
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(MAX_SUGGESTIONS);
    candidates
}
