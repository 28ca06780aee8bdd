//! Pick log commands: listing, runs, deletion and reordering

use tracing::info;

use super::common::{resolve_run, CommandContext};
use crate::{storage::IndexedPick, Result, RunId};

/// One text line per pick, keyed by its log index
pub fn format_pick_line(pick: &IndexedPick) -> String {
    format!("[{}] {} – {}", pick.index, pick.record.date, pick.record.team)
}

/// Handle the picks command
pub fn handle_picks(ctx: &CommandContext, run: Option<RunId>, as_json: bool) -> Result<()> {
    let run = resolve_run(&ctx.store, run);
    let picks = ctx.store.picks_for_run(run);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&picks)?);
        return Ok(());
    }

    println!("=== Picks in run {} ===", run);
    if picks.is_empty() {
        println!("No picks yet.");
    }
    for pick in &picks {
        println!("{}", format_pick_line(pick));
    }

    Ok(())
}

/// Handle the runs command
pub fn handle_runs(ctx: &CommandContext, as_json: bool) -> Result<()> {
    let runs = ctx.store.list_runs();

    if as_json {
        println!("{}", serde_json::to_string(&runs)?);
        return Ok(());
    }

    for run in runs {
        let count = ctx.store.picks_for_run(run).len();
        println!("Run {}: {} picks", run, count);
    }

    Ok(())
}

/// Handle the new-run command
pub fn handle_new_run(ctx: &CommandContext) -> Result<()> {
    let run = ctx.store.next_run_id();
    println!("New run: {}", run);
    println!("Start it with: nba-streak pick <TEAM> --run {}", run);
    Ok(())
}

/// Handle the delete command
pub fn handle_delete(ctx: &mut CommandContext, index: usize) -> Result<()> {
    let target = ctx.store.records().get(index).cloned();
    if ctx.store.delete_pick(index)? {
        if let Some(record) = target {
            info!("deleted pick {} ({} in run {})", index, record.team, record.run);
            println!("✓ Deleted [{}] {} – {}", index, record.date, record.team);
        }
    } else {
        println!("No pick at index {}; nothing deleted.", index);
    }
    Ok(())
}

/// Handle the swap command
pub fn handle_swap(ctx: &mut CommandContext, index_a: usize, index_b: usize) -> Result<()> {
    if ctx.store.swap_picks(index_a, index_b)? {
        info!("swapped picks {} and {}", index_a, index_b);
        println!("✓ Swapped picks {} and {}", index_a, index_b);
    } else {
        println!(
            "Cannot swap {} and {}: indices must be distinct and in range.",
            index_a, index_b
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::PickRecord;

    #[test]
    fn test_format_pick_line() {
        let pick = IndexedPick {
            index: 4,
            record: PickRecord::new("2025-01-03", "Denver Nuggets", RunId::new(2)),
        };
        assert_eq!(format_pick_line(&pick), "[4] 2025-01-03 – Denver Nuggets");
    }

    #[test]
    fn test_indexed_pick_json_is_flat() {
        let pick = IndexedPick {
            index: 0,
            record: PickRecord::new("2025-01-03", "Denver Nuggets", RunId::new(2)),
        };
        let value = serde_json::to_value(&pick).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "index": 0,
                "date": "2025-01-03",
                "team": "Denver Nuggets",
                "run": 2
            })
        );
    }
}
