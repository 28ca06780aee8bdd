//! Core utilities for the NBA streak picker
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File locations and the schedule cache
//! - `http`: Request headers for the schedule API

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{
    cache_root, default_picks_path, try_read_to_string, write_string, CacheStatus, ScheduleCache,
    ScheduleCacheKey,
};
pub use http::schedule_header_map;
