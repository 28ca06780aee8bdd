//! CLI argument definitions and parsing.

pub mod types;

use crate::PICKS_FILE_ENV_VAR;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{MonthSpec, RunId};

/// Run and day selection shared between commands
#[derive(Debug, Args)]
pub struct DayArgs {
    /// Run number (defaults to the latest run).
    #[clap(long, short)]
    pub run: Option<RunId>,

    /// Game day as YYYY-MM-DD (defaults to today; unreadable dates fall back to today).
    #[clap(long, short)]
    pub day: Option<String>,
}

#[derive(Debug, Parser)]
#[clap(
    name = "nba-streak",
    about = "Pick one NBA team per day, never the same team twice in a run"
)]
pub struct StreakCli {
    /// Pick log location (or set `NBA_STREAK_PICKS_FILE`).
    #[clap(long, global = true, env = PICKS_FILE_ENV_VAR)]
    pub picks_file: Option<PathBuf>,

    /// Log progress details to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the day's games and which teams are already used in the run
    Games {
        #[clap(flatten)]
        selection: DayArgs,

        /// Force refresh from the schedule API, ignoring the cache.
        #[clap(long)]
        refresh: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Pick a team for the day
    ///
    /// The team must play that day, the run must not have a pick for that day
    /// yet, and the team must not have been used earlier in the run.
    Pick {
        /// Team name as shown by `games` (case-insensitive).
        team: String,

        #[clap(flatten)]
        selection: DayArgs,

        /// Force refresh from the schedule API, ignoring the cache.
        #[clap(long)]
        refresh: bool,
    },

    /// List the picks of a run with their log indices
    Picks {
        /// Run number (defaults to the latest run).
        #[clap(long, short)]
        run: Option<RunId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List all runs in the pick log
    Runs {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print the number to use for a fresh run
    NewRun,

    /// Delete a pick by its log index (see `picks`)
    Delete {
        /// Log index of the pick.
        index: usize,
    },

    /// Swap two picks by their log indices (see `picks`)
    Swap {
        /// Log index of the first pick.
        index_a: usize,

        /// Log index of the second pick.
        index_b: usize,
    },

    /// Suggest up to three teams for the day
    Suggest {
        #[clap(flatten)]
        selection: DayArgs,

        /// Force refresh from the schedule API, ignoring the cache.
        #[clap(long)]
        refresh: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a month calendar of the run's picks
    Calendar {
        /// Run number (defaults to the latest run).
        #[clap(long, short)]
        run: Option<RunId>,

        /// Month as YYYY-MM (defaults to the current month).
        #[clap(long, short)]
        month: Option<MonthSpec>,

        /// Output results as JSON instead of a text grid.
        #[clap(long)]
        json: bool,
    },
}
