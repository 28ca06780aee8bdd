use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;


/// One scheduled game: the two participating teams by display name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameMatchup {
    pub home: String,
    pub visitor: String,
}

impl GameMatchup {
    pub fn new(home: impl Into<String>, visitor: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            visitor: visitor.into(),
        }
    }

    /// Whether `team` (exact name) takes part in this game.
    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.visitor == team
    }
}

/// Case-folded form of a team name, used wherever names are compared.
pub fn team_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Sorted, de-duplicated names of every team playing in `games`.
pub fn teams_playing(games: &[GameMatchup]) -> BTreeSet<String> {
    games
        .iter()
        .flat_map(|g| [g.home.clone(), g.visitor.clone()])
        .collect()
}

/// Team object as returned by the games endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiTeam {
    pub full_name: String,
}

/// Game object as returned by the games endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiGame {
    pub home_team: ApiTeam,
    pub visitor_team: ApiTeam,
}

impl From<ApiGame> for GameMatchup {
    fn from(game: ApiGame) -> Self {
        Self {
            home: game.home_team.full_name,
            visitor: game.visitor_team.full_name,
        }
    }
}

/// Top-level envelope for the games endpoint
#[derive(Debug, Deserialize)]
pub struct GamesEnvelope {
    #[serde(default)]
    pub data: Vec<ApiGame>,
}

impl GamesEnvelope {
    pub fn into_matchups(self) -> Vec<GameMatchup> {
        self.data.into_iter().map(GameMatchup::from).collect()
    }
}
