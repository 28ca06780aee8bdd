//! Error types for the NBA streak picker

use thiserror::Error;

use crate::cli::types::RunId;


pub type Result<T> = std::result::Result<T, StreakError>;

/// Reasons a pick is refused before it reaches the store.
///
/// Variants are listed in the order the checks run; when several apply the
/// first one is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickRejection {
    #[error("No team selected")]
    NoTeamSelected,

    #[error("'{team}' is not playing on that day")]
    TeamNotPlaying { team: String },

    #[error("You already picked a team for {date} in run {run}")]
    DateAlreadyPicked { date: String, run: RunId },

    #[error("'{team}' was already picked on another day in run {run}")]
    TeamAlreadyUsed { team: String, run: RunId },
}

#[derive(Error, Debug)]
pub enum StreakError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse run number: {0}")]
    InvalidRun(#[from] std::num::ParseIntError),

    #[error("Run numbers start at 1, got {value}")]
    NonPositiveRun { value: u32 },

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    #[error("Invalid month (expected YYYY-MM): {value}")]
    InvalidMonth { value: String },

    #[error("Pick rejected: {0}")]
    Rejected(#[from] PickRejection),
}
