//! Game rules: pick validation, smart-pick ranking and the run calendar.

pub mod calendar;
pub mod recommend;
pub mod validation;

pub use calendar::{classify_day, month_grid, DayStatus};
pub use recommend::{recommend, Suggestion};
pub use validation::{submit_pick, validate_pick};
