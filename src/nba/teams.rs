//! Static team metadata: logo URLs and strength ratings.
//!
//! Both tables are keyed by the full display name the schedule API returns
//! (e.g. "Boston Celtics") and never change at runtime.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Rating used for any team missing from the strength table.
pub const DEFAULT_STRENGTH: i32 = 80;

/// Logo URLs on the NBA CDN, one per franchise.
pub const TEAM_LOGOS: &[(&str, &str)] = &[
    ("Atlanta Hawks", "https://cdn.nba.com/logos/nba/1610612737/global/L/logo.svg"),
    ("Boston Celtics", "https://cdn.nba.com/logos/nba/1610612738/global/L/logo.svg"),
    ("Brooklyn Nets", "https://cdn.nba.com/logos/nba/1610612751/global/L/logo.svg"),
    ("Charlotte Hornets", "https://cdn.nba.com/logos/nba/1610612766/global/L/logo.svg"),
    ("Chicago Bulls", "https://cdn.nba.com/logos/nba/1610612741/global/L/logo.svg"),
    ("Cleveland Cavaliers", "https://cdn.nba.com/logos/nba/1610612739/global/L/logo.svg"),
    ("Dallas Mavericks", "https://cdn.nba.com/logos/nba/1610612742/global/L/logo.svg"),
    ("Denver Nuggets", "https://cdn.nba.com/logos/nba/1610612743/global/L/logo.svg"),
    ("Detroit Pistons", "https://cdn.nba.com/logos/nba/1610612765/global/L/logo.svg"),
    ("Golden State Warriors", "https://cdn.nba.com/logos/nba/1610612744/global/L/logo.svg"),
    ("Houston Rockets", "https://cdn.nba.com/logos/nba/1610612745/global/L/logo.svg"),
    ("Indiana Pacers", "https://cdn.nba.com/logos/nba/1610612754/global/L/logo.svg"),
    ("Los Angeles Clippers", "https://cdn.nba.com/logos/nba/1610612746/global/L/logo.svg"),
    ("Los Angeles Lakers", "https://cdn.nba.com/logos/nba/1610612747/global/L/logo.svg"),
    ("Memphis Grizzlies", "https://cdn.nba.com/logos/nba/1610612763/global/L/logo.svg"),
    ("Miami Heat", "https://cdn.nba.com/logos/nba/1610612748/global/L/logo.svg"),
    ("Milwaukee Bucks", "https://cdn.nba.com/logos/nba/1610612749/global/L/logo.svg"),
    ("Minnesota Timberwolves", "https://cdn.nba.com/logos/nba/1610612750/global/L/logo.svg"),
    ("New Orleans Pelicans", "https://cdn.nba.com/logos/nba/1610612740/global/L/logo.svg"),
    ("New York Knicks", "https://cdn.nba.com/logos/nba/1610612752/global/L/logo.svg"),
    ("Oklahoma City Thunder", "https://cdn.nba.com/logos/nba/1610612760/global/L/logo.svg"),
    ("Orlando Magic", "https://cdn.nba.com/logos/nba/1610612753/global/L/logo.svg"),
    ("Philadelphia 76ers", "https://cdn.nba.com/logos/nba/1610612755/global/L/logo.svg"),
    ("Phoenix Suns", "https://cdn.nba.com/logos/nba/1610612756/global/L/logo.svg"),
    ("Portland Trail Blazers", "https://cdn.nba.com/logos/nba/1610612757/global/L/logo.svg"),
    ("Sacramento Kings", "https://cdn.nba.com/logos/nba/1610612758/global/L/logo.svg"),
    ("San Antonio Spurs", "https://cdn.nba.com/logos/nba/1610612759/global/L/logo.svg"),
    ("Toronto Raptors", "https://cdn.nba.com/logos/nba/1610612761/global/L/logo.svg"),
    ("Utah Jazz", "https://cdn.nba.com/logos/nba/1610612762/global/L/logo.svg"),
    ("Washington Wizards", "https://cdn.nba.com/logos/nba/1610612764/global/L/logo.svg"),
];

/// Season strength ratings on a 0-100 scale.
pub const TEAM_STRENGTHS: &[(&str, i32)] = &[
    ("Atlanta Hawks", 81),
    ("Boston Celtics", 96),
    ("Brooklyn Nets", 72),
    ("Charlotte Hornets", 71),
    ("Chicago Bulls", 78),
    ("Cleveland Cavaliers", 94),
    ("Dallas Mavericks", 86),
    ("Denver Nuggets", 91),
    ("Detroit Pistons", 80),
    ("Golden State Warriors", 85),
    ("Houston Rockets", 89),
    ("Indiana Pacers", 84),
    ("Los Angeles Clippers", 86),
    ("Los Angeles Lakers", 87),
    ("Memphis Grizzlies", 88),
    ("Miami Heat", 82),
    ("Milwaukee Bucks", 85),
    ("Minnesota Timberwolves", 89),
    ("New Orleans Pelicans", 74),
    ("New York Knicks", 92),
    ("Oklahoma City Thunder", 98),
    ("Orlando Magic", 83),
    ("Philadelphia 76ers", 76),
    ("Phoenix Suns", 79),
    ("Portland Trail Blazers", 75),
    ("Sacramento Kings", 80),
    ("San Antonio Spurs", 77),
    ("Toronto Raptors", 73),
    ("Utah Jazz", 70),
    ("Washington Wizards", 68),
];

static LOGO_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TEAM_LOGOS.iter().copied().collect());

/// Logo URL for a team, if it is a known franchise.
pub fn team_logo(team: &str) -> Option<&'static str> {
    LOGO_INDEX.get(team).copied()
}

/// Name-to-rating lookup with a fixed fallback for unrated teams.
#[derive(Debug, Clone)]
pub struct StrengthTable {
    ratings: HashMap<String, i32>,
    default: i32,
}

impl StrengthTable {
    pub fn new<I, S>(ratings: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Self {
            ratings: ratings.into_iter().map(|(t, r)| (t.into(), r)).collect(),
            default: DEFAULT_STRENGTH,
        }
    }

    /// Rating for `team`, or the default when the team is not listed.
    pub fn strength(&self, team: &str) -> i32 {
        self.ratings.get(team).copied().unwrap_or(self.default)
    }
}

impl Default for StrengthTable {
    fn default() -> Self {
        Self::new(TEAM_STRENGTHS.iter().copied())
    }
}

/// The built-in ratings, shared for the life of the process.
pub static STRENGTHS: LazyLock<StrengthTable> = LazyLock::new(StrengthTable::default);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_cover_thirty_teams() {
        assert_eq!(TEAM_LOGOS.len(), 30);
        assert_eq!(TEAM_STRENGTHS.len(), 30);

        for (team, _) in TEAM_STRENGTHS {
            assert!(team_logo(team).is_some(), "missing logo for {team}");
        }
    }

    #[test]
    fn test_team_logo_lookup() {
        assert_eq!(
            team_logo("Miami Heat"),
            Some("https://cdn.nba.com/logos/nba/1610612748/global/L/logo.svg")
        );
        assert_eq!(team_logo("Seattle SuperSonics"), None);
    }

    #[test]
    fn test_strength_lookup_and_default() {
        assert_eq!(STRENGTHS.strength("Boston Celtics"), 96);
        assert_eq!(STRENGTHS.strength("Miami Heat"), 82);
        assert_eq!(STRENGTHS.strength("Seattle SuperSonics"), DEFAULT_STRENGTH);
    }

    #[test]
    fn test_strength_ratings_in_range() {
        for (team, rating) in TEAM_STRENGTHS {
            assert!((0..=100).contains(rating), "{team} rated {rating}");
        }
    }

    #[test]
    fn test_custom_strength_table() {
        let table = StrengthTable::new([("Team A", 90), ("Team B", 60)]);
        assert_eq!(table.strength("Team A"), 90);
        assert_eq!(table.strength("Team B"), 60);
        assert_eq!(table.strength("Team C"), 80);
    }
}
