//! Type-safe wrappers for runs, days and months.

pub mod ids;
pub mod time;

pub use ids::RunId;
pub use time::{parse_day, MonthSpec};
