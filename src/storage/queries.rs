//! Pick log queries and mutations

use super::{models::*, schema::PickStore};
use crate::cli::types::RunId;
use crate::nba::team_key;
use crate::Result;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashSet};

fn same_team(a: &str, b: &str) -> bool {
    team_key(a) == team_key(b)
}

impl PickStore {
    /// Sorted distinct runs present in the log; `[1]` when the log is empty
    pub fn list_runs(&self) -> Vec<RunId> {
        let runs: BTreeSet<RunId> = self.picks.iter().map(|p| p.run).collect();
        if runs.is_empty() {
            vec![RunId::default()]
        } else {
            runs.into_iter().collect()
        }
    }

    /// The highest run in the log (1 when empty)
    pub fn latest_run(&self) -> RunId {
        self.picks
            .iter()
            .map(|p| p.run)
            .max()
            .unwrap_or_default()
    }

    /// Id for a fresh run: one past the highest existing run
    pub fn next_run_id(&self) -> RunId {
        if self.picks.is_empty() {
            RunId::default()
        } else {
            self.latest_run().next()
        }
    }

    /// All picks of `run` with their global indices, in log order
    pub fn picks_for_run(&self, run: RunId) -> Vec<IndexedPick> {
        self.picks
            .iter()
            .enumerate()
            .filter(|(_, p)| p.run == run)
            .map(|(index, p)| IndexedPick {
                index,
                record: p.clone(),
            })
            .collect()
    }

    /// Append a pick and persist.
    ///
    /// Returns `Ok(false)` without touching the log when `team` is blank.
    /// Uniqueness per run is not checked here; see `streak::validation`.
    pub fn save(&mut self, team: &str, date: &str, run: RunId) -> Result<bool> {
        let team = team.trim();
        if team.is_empty() {
            return Ok(false);
        }
        self.picks.push(PickRecord::new(date, team, run));
        self.persist()?;
        Ok(true)
    }

    /// Case-insensitive test whether `team` was already used in `run`
    pub fn already_picked(&self, team: &str, run: RunId) -> bool {
        self.picks
            .iter()
            .any(|p| p.run == run && same_team(&p.team, team))
    }

    /// Whether `run` already has a pick on `date` (exact match)
    pub fn has_pick_on_date(&self, date: &str, run: RunId) -> bool {
        self.picks.iter().any(|p| p.run == run && p.date == date)
    }

    /// Team names used in `run`, folded with [`team_key`] for case-insensitive lookups
    pub fn used_teams(&self, run: RunId) -> HashSet<String> {
        self.picks
            .iter()
            .filter(|p| p.run == run)
            .map(|p| team_key(&p.team))
            .collect()
    }

    /// Parseable pick dates in `run`; legacy `unknown` dates are skipped
    pub fn pick_dates(&self, run: RunId) -> BTreeSet<NaiveDate> {
        self.picks
            .iter()
            .filter(|p| p.run == run)
            .filter_map(|p| NaiveDate::parse_from_str(&p.date, "%Y-%m-%d").ok())
            .collect()
    }

    /// Remove the pick at global `index` and persist; out of range is ignored
    pub fn delete_pick(&mut self, index: usize) -> Result<bool> {
        if index >= self.picks.len() {
            return Ok(false);
        }
        self.picks.remove(index);
        self.persist()?;
        Ok(true)
    }

    /// Exchange two picks by global index and persist.
    ///
    /// Ignored unless both indices are in range and distinct.
    pub fn swap_picks(&mut self, index_a: usize, index_b: usize) -> Result<bool> {
        let len = self.picks.len();
        if index_a >= len || index_b >= len || index_a == index_b {
            return Ok(false);
        }
        self.picks.swap(index_a, index_b);
        self.persist()?;
        Ok(true)
    }
}
