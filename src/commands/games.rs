//! Games command: the day's matchups with per-team pick status

use serde::Serialize;

use super::common::{day_key, resolve_day, resolve_run, CommandContext};
use crate::{
    cli::DayArgs,
    nba::{teams::team_logo, GameMatchup},
    storage::PickStore,
    Result, RunId,
};

/// One side of a game as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCard {
    pub name: String,
    pub logo: Option<&'static str>,
    /// Already used in the selected run
    pub picked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameCard {
    pub visitor: TeamCard,
    pub home: TeamCard,
}

fn team_card(name: &str, store: &PickStore, run: RunId) -> TeamCard {
    TeamCard {
        name: name.to_string(),
        logo: team_logo(name),
        picked: store.already_picked(name, run),
    }
}

/// Pair each game with logo and used-in-run flags
pub fn build_game_cards(games: &[GameMatchup], store: &PickStore, run: RunId) -> Vec<GameCard> {
    games
        .iter()
        .map(|g| GameCard {
            visitor: team_card(&g.visitor, store, run),
            home: team_card(&g.home, store, run),
        })
        .collect()
}

fn side(card: &TeamCard) -> String {
    if card.picked {
        format!("{} (used)", card.name)
    } else {
        card.name.clone()
    }
}

/// Handle the games command
pub async fn handle_games(
    ctx: &CommandContext,
    selection: DayArgs,
    refresh: bool,
    as_json: bool,
) -> Result<()> {
    let run = resolve_run(&ctx.store, selection.run);
    let day = resolve_day(selection.day.as_deref(), ctx.today);
    let games = ctx.games_for(day, refresh).await;
    let cards = build_game_cards(&games, &ctx.store, run);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    println!("=== Games on {} (run {}) ===", day_key(day), run);
    if cards.is_empty() {
        println!("No games on this day (or the schedule could not be loaded).");
    }
    for (i, card) in cards.iter().enumerate() {
        println!("{}. {} @ {}", i + 1, side(&card.visitor), side(&card.home));
    }
    if ctx.store.has_pick_on_date(&day_key(day), run) {
        println!("You already have a pick for this day in run {}.", run);
    }

    Ok(())
}
