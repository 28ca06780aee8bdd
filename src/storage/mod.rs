//! Storage layer for the NBA streak picker
//!
//! The pick log is a flat JSON array on disk, owned by `PickStore`:
//! - `models`: Record types and legacy-format normalization
//! - `schema`: Loading and whole-file persistence
//! - `queries`: Run/date/team lookups and index-based mutations

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export the main types and the store for easy access
pub use models::{IndexedPick, PickRecord, UNKNOWN_DATE};
pub use schema::PickStore;
