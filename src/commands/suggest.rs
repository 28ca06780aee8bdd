//! Suggest command: smart picks for a day

use super::common::{day_key, resolve_day, resolve_run, CommandContext};
use crate::{
    cli::DayArgs,
    nba::teams::STRENGTHS,
    streak::{recommend, Suggestion},
    Result,
};

/// Text block for one suggestion
pub fn format_suggestion(rank: usize, s: &Suggestion) -> String {
    let venue = if s.home { "vs" } else { "@" };
    let mut out = format!("{}. {} {} {} – score {}", rank, s.team, venue, s.opponent, s.score);
    for reason in &s.reasons {
        out.push_str("\n   - ");
        out.push_str(reason);
    }
    out
}

/// Handle the suggest command
pub async fn handle_suggest(
    ctx: &CommandContext,
    selection: DayArgs,
    refresh: bool,
    as_json: bool,
) -> Result<()> {
    let run = resolve_run(&ctx.store, selection.run);
    let day = resolve_day(selection.day.as_deref(), ctx.today);
    let picked_today = ctx.store.has_pick_on_date(&day_key(day), run);

    let games = if picked_today {
        Vec::new()
    } else {
        ctx.games_for(day, refresh).await
    };
    let suggestions = recommend(&games, &ctx.store.used_teams(run), &STRENGTHS, picked_today);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    println!("=== Smart picks for {} (run {}) ===", day_key(day), run);
    if picked_today {
        println!("You already picked a team for this day.");
    } else if suggestions.is_empty() {
        println!("No unused teams play on this day.");
    }
    for (i, s) in suggestions.iter().enumerate() {
        println!("{}", format_suggestion(i + 1, s));
    }

    Ok(())
}
