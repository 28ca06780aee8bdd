//! Calendar command: month view of a run

use serde::Serialize;

use super::common::{resolve_run, CommandContext};
use crate::{
    streak::calendar::{month_grid, render_month, CalendarCell},
    MonthSpec, Result, RunId,
};

#[derive(Debug, Serialize)]
struct CalendarView {
    run: RunId,
    month: String,
    weeks: Vec<[CalendarCell; 7]>,
}

/// Handle the calendar command
pub fn handle_calendar(
    ctx: &CommandContext,
    run: Option<RunId>,
    month: Option<MonthSpec>,
    as_json: bool,
) -> Result<()> {
    let run = resolve_run(&ctx.store, run);
    let month = month.unwrap_or_else(|| MonthSpec::containing(ctx.today));
    let weeks = month_grid(month, &ctx.store.pick_dates(run), ctx.today);

    if as_json {
        let view = CalendarView {
            run,
            month: month.to_string(),
            weeks,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Run {}", run);
    print!("{}", render_month(month, &weeks));
    Ok(())
}
