//! Pick command: validate and record one team for a day

use super::common::{day_key, resolve_day, resolve_run, CommandContext};
use crate::{
    cli::DayArgs,
    nba::teams_playing,
    streak::{submit_pick, validation::canonical_team_name},
    PickRejection, Result, StreakError,
};

/// Handle the pick command
pub async fn handle_pick(
    ctx: &mut CommandContext,
    team: &str,
    selection: DayArgs,
    refresh: bool,
) -> Result<()> {
    let run = resolve_run(&ctx.store, selection.run);
    let day = resolve_day(selection.day.as_deref(), ctx.today);
    let games = ctx.games_for(day, refresh).await;

    let team = canonical_team_name(&games, team);
    let record = match submit_pick(&mut ctx.store, &games, &team, &day_key(day), run) {
        Ok(record) => record,
        Err(e @ StreakError::Rejected(PickRejection::TeamNotPlaying { .. })) => {
            let playing = teams_playing(&games);
            if !playing.is_empty() {
                eprintln!("Teams playing on {}:", day_key(day));
                for name in playing {
                    eprintln!(" - {}", name);
                }
            }
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    println!("✓ Pick saved: {} – {} (run {})", record.date, record.team, record.run);
    if let Some(next) = day.succ_opt() {
        println!("Next up: {}", day_key(next));
    }

    Ok(())
}
