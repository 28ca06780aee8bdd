//! Command implementations for the NBA streak picker

pub mod calendar;
pub mod common;
pub mod games;
pub mod pick;
pub mod picks;
pub mod suggest;

pub use common::{resolve_day, resolve_run, CommandContext};
