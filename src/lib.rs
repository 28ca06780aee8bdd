//! NBA Streak Picker Library
//!
//! Track a "one team per day, never the same team twice" NBA streak game.
//!
//! ## Features
//!
//! - **Pick Log**: Ordered JSON log of picks, split into independent runs
//! - **Pick Validation**: One pick per day and one use per team in each run
//! - **Smart Picks**: Deterministic ranking of today's unused teams
//! - **Run Calendar**: Month view marking picked, back-to-back and open days
//! - **Schedule Client**: Daily matchups from balldontlie, cached on disk
//!
//! ## Quick Start
//!
//! ```rust
//! use nba_streak::{
//!     nba::{teams::STRENGTHS, GameMatchup},
//!     storage::PickStore,
//!     streak::{recommend, submit_pick},
//!     RunId,
//! };
//!
//! # fn example() -> nba_streak::Result<()> {
//! let mut store = PickStore::in_memory();
//! let run = RunId::default();
//! let games = vec![GameMatchup::new("Boston Celtics", "Miami Heat")];
//!
//! let used = store.used_teams(run);
//! let suggestions = recommend(&games, &used, &STRENGTHS, false);
//! assert_eq!(suggestions[0].team, "Boston Celtics");
//!
//! submit_pick(&mut store, &games, "Boston Celtics", "2025-01-15", run)?;
//! assert!(store.already_picked("boston celtics", run));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export BALLDONTLIE_API_KEY=your-key
//! export NBA_STREAK_PICKS_FILE=~/picks.json   # optional
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nba;
pub mod storage;
pub mod streak;

// Re-export commonly used types
pub use cli::types::{MonthSpec, RunId};
pub use error::{PickRejection, Result, StreakError};
pub use nba::GameMatchup;
pub use storage::{IndexedPick, PickRecord, PickStore};

pub const PICKS_FILE_ENV_VAR: &str = "NBA_STREAK_PICKS_FILE";
pub const API_KEY_ENV_VAR: &str = "BALLDONTLIE_API_KEY";
pub const API_BASE_ENV_VAR: &str = "NBA_STREAK_API_BASE";
