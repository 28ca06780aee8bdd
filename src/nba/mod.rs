//! Schedule source and static team metadata.

pub mod http;
pub mod schedule;
pub mod teams;
pub mod types;

pub use types::{team_key, teams_playing, GameMatchup};
