//! Month calendar with per-day pick status.

use crate::cli::types::MonthSpec;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

/// How a calendar cell is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Padding day from a neighbouring month
    OutsideMonth,
    /// Picked, and the day before was picked too
    BackToBack,
    Picked,
    /// Today or later, not picked yet
    Future,
    /// In the past and never picked
    Empty,
}

impl DayStatus {
    /// Single-character marker for text rendering
    pub fn marker(&self) -> char {
        match self {
            DayStatus::OutsideMonth => ' ',
            DayStatus::BackToBack => '#',
            DayStatus::Picked => '*',
            DayStatus::Future => '.',
            DayStatus::Empty => '-',
        }
    }
}

/// Classify `day` for the displayed `month`, given one run's pick dates.
pub fn classify_day(
    day: NaiveDate,
    month: MonthSpec,
    picked: &BTreeSet<NaiveDate>,
    today: NaiveDate,
) -> DayStatus {
    if !month.contains(day) {
        return DayStatus::OutsideMonth;
    }
    if picked.contains(&day) {
        let prev_picked = day.pred_opt().is_some_and(|prev| picked.contains(&prev));
        return if prev_picked {
            DayStatus::BackToBack
        } else {
            DayStatus::Picked
        };
    }
    if day >= today {
        DayStatus::Future
    } else {
        DayStatus::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub status: DayStatus,
}

/// Monday-first weeks covering `month`, padded with neighbouring days.
pub fn month_grid(
    month: MonthSpec,
    picked: &BTreeSet<NaiveDate>,
    today: NaiveDate,
) -> Vec<[CalendarCell; 7]> {
    let first = month.first_day();
    let last = month.last_day();
    let lead = u64::from(first.weekday().num_days_from_monday());
    let mut cursor = first.checked_sub_days(Days::new(lead)).unwrap_or(first);

    let mut weeks = Vec::new();
    while cursor <= last {
        let week: [CalendarCell; 7] = std::array::from_fn(|offset| {
            let date = cursor
                .checked_add_days(Days::new(offset as u64))
                .unwrap_or(cursor);
            CalendarCell {
                date,
                status: classify_day(date, month, picked, today),
            }
        });
        weeks.push(week);
        match cursor.checked_add_days(Days::new(7)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    weeks
}

/// Plain-text rendering of [`month_grid`] with a legend.
pub fn render_month(month: MonthSpec, weeks: &[[CalendarCell; 7]]) -> String {
    let mut out = format!("{:^28}\n", month.to_string());
    out.push_str(" Mo  Tu  We  Th  Fr  Sa  Su\n");
    for week in weeks {
        for cell in week {
            if cell.status == DayStatus::OutsideMonth {
                out.push_str("    ");
            } else {
                out.push_str(&format!("{:>3}{}", cell.date.day(), cell.status.marker()));
            }
        }
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        out.push('\n');
    }
    out.push_str("* picked  # back-to-back  . open  - missed\n");
    out
}
