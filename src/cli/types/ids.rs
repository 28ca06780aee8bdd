//! ID types for pick runs.

use crate::error::{Result, StreakError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for run numbers.
///
/// A run is an independent sequence of daily picks. Run numbers are positive
/// and default to 1, which is also what single-run pick files are read as.
///
/// # Examples
///
/// ```rust
/// use nba_streak::RunId;
///
/// let run = RunId::new(2);
/// assert_eq!(run.as_u32(), 2);
/// assert_eq!(run.next(), RunId::new(3));
/// assert_eq!(RunId::default().to_string(), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub u32);

impl RunId {
    /// Create a new RunId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// The run that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RunId {
    type Err = StreakError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u32 = s.trim().parse()?;
        if value == 0 {
            return Err(StreakError::NonPositiveRun { value });
        }
        Ok(Self(value))
    }
}
