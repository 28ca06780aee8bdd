//! File locations plus a two-tier cache for schedule data
//!
//! This module provides:
//! - Default locations for the pick log and the schedule cache
//! - Small read/write helpers for JSON documents on disk
//! - `UnifiedCache`: an in-memory LRU layer in front of per-key JSON files
//!
//! Entries found only on disk are promoted to memory on first access.

use chrono::NaiveDate;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::nba::types::GameMatchup;

const APP_DIR: &str = "nba-streak";

fn home_fallback(sub: &[&str]) -> PathBuf {
    let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    for part in sub {
        home.push(part);
    }
    home
}

/// Path: ~/.cache/nba-streak
pub fn cache_root() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| home_fallback(&[".cache"]))
        .join(APP_DIR)
}

/// Path: ~/.local/share/nba-streak/picks.json (platform data dir)
pub fn default_picks_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| home_fallback(&[".local", "share"]))
        .join(APP_DIR)
        .join("picks.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed.
///
/// The contents go to a sibling `.tmp` file first and are renamed into place,
/// so an interrupted write leaves the previous file intact.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = tmp_path(path);
    let mut f = fs::File::create(&tmp)?;
    f.write_all(contents.as_bytes())?;
    f.sync_all()?;
    drop(f);
    fs::rename(&tmp, path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Generic cache key that can be used for both memory and disk caching
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// Generate a string representation for file system storage
    fn to_file_key(&self) -> String;

    /// Generate the file path for this cache entry under `base`
    fn to_file_path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.json", self.to_file_key()))
    }
}

/// Cache key for one day's schedule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduleCacheKey {
    pub day: NaiveDate,
}

impl CacheKey for ScheduleCacheKey {
    fn to_file_key(&self) -> String {
        format!("schedule_{}", self.day.format("%Y-%m-%d"))
    }
}

/// Where a cached value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Served from memory or disk
    Hit,
    /// Not cached; fetched from the source
    Miss,
    /// Cache bypassed on request; fetched from the source
    Refreshed,
}

/// Unified cache that combines LRU memory cache with file system persistence
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory_cache: Arc<Mutex<LruCache<K, V>>>,
    base_dir: PathBuf,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Create a new unified cache with specified memory capacity, persisting under `base_dir`
    pub fn new(memory_capacity: usize, base_dir: impl Into<PathBuf>) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Arc::new(Mutex::new(LruCache::new(capacity))),
            base_dir: base_dir.into(),
        }
    }

    /// Get an item from cache (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Ok(mut memory) = self.memory_cache.lock() {
            if let Some(value) = memory.get(key) {
                return Some(value.clone());
            }
        }

        let value = self.get_from_disk(key)?;
        if let Ok(mut memory) = self.memory_cache.lock() {
            memory.put(key.clone(), value.clone());
        }
        Some(value)
    }

    /// Put an item into cache (stores in both memory and disk)
    pub fn put(&self, key: K, value: V) -> std::io::Result<()> {
        let written = self.put_to_disk(&key, &value);
        if let Ok(mut memory) = self.memory_cache.lock() {
            memory.put(key, value);
        }
        written
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = key.to_file_path(&self.base_dir);
        let content = try_read_to_string(&path)?;
        serde_json::from_str(&content).ok()
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let path = key.to_file_path(&self.base_dir);
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&path, &content)
    }
}

/// Cache of per-day matchups
pub type ScheduleCache = UnifiedCache<ScheduleCacheKey, Vec<GameMatchup>>;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn key(d: u32) -> ScheduleCacheKey {
        ScheduleCacheKey {
            day: NaiveDate::from_ymd_opt(2025, 1, d).unwrap(),
        }
    }

    fn matchup(home: &str, visitor: &str) -> GameMatchup {
        GameMatchup {
            home: home.to_string(),
            visitor: visitor.to_string(),
        }
    }

    #[test]
    fn test_default_paths_use_app_dir() {
        assert!(cache_root().to_string_lossy().contains("nba-streak"));

        let picks = default_picks_path();
        assert!(picks.to_string_lossy().contains("nba-streak"));
        assert!(picks.ends_with("picks.json"));
    }

    #[test]
    fn test_try_read_to_string_existing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        fs::write(&file_path, "hello world").unwrap();

        assert_eq!(try_read_to_string(&file_path), Some("hello world".to_string()));
    }

    #[test]
    fn test_try_read_to_string_nonexistent_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nonexistent.txt");

        assert_eq!(try_read_to_string(&file_path), None);
    }

    #[test]
    fn test_write_string_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("subdir").join("output.json");

        write_string(&file_path, "[]").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "[]");
    }

    #[test]
    fn test_write_string_replaces_without_leftovers() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("picks.json");

        write_string(&file_path, "[1, 2, 3]").unwrap();
        write_string(&file_path, "[4]").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "[4]");
        assert!(!dir.path().join("picks.json.tmp").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_stale_tmp_file_does_not_affect_target() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("picks.json");
        write_string(&file_path, "[\"kept\"]").unwrap();

        // Leftover from an interrupted write
        fs::write(dir.path().join("picks.json.tmp"), "[\"tru").unwrap();
        assert_eq!(try_read_to_string(&file_path).unwrap(), "[\"kept\"]");

        write_string(&file_path, "[]").unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "[]");
        assert!(!dir.path().join("picks.json.tmp").exists());
    }

    #[test]
    fn test_schedule_key_file_name() {
        let key = key(15);
        assert_eq!(key.to_file_key(), "schedule_2025-01-15");

        let path = key.to_file_path(Path::new("/tmp/cache"));
        assert_eq!(path, PathBuf::from("/tmp/cache/schedule_2025-01-15.json"));
    }

    #[test]
    fn test_unified_cache_put_and_get() {
        let dir = tempdir().unwrap();
        let cache: ScheduleCache = UnifiedCache::new(4, dir.path());

        let games = vec![matchup("Boston Celtics", "Miami Heat")];
        cache.put(key(1), games.clone()).unwrap();

        assert_eq!(cache.get(&key(1)), Some(games));
        assert_eq!(cache.get(&key(2)), None);
        assert!(dir.path().join("schedule_2025-01-01.json").exists());
    }

    fn drop_disk_entry(dir: &Path, key: &ScheduleCacheKey) {
        fs::remove_file(key.to_file_path(dir)).unwrap();
    }

    #[test]
    fn test_unified_cache_promotes_disk_entries() {
        let dir = tempdir().unwrap();
        let games = vec![matchup("Denver Nuggets", "Utah Jazz")];

        let writer: ScheduleCache = UnifiedCache::new(4, dir.path());
        writer.put(key(3), games.clone()).unwrap();

        let reader: ScheduleCache = UnifiedCache::new(4, dir.path());
        assert_eq!(reader.get(&key(3)), Some(games.clone()));

        // Now served from memory
        drop_disk_entry(dir.path(), &key(3));
        assert_eq!(reader.get(&key(3)), Some(games));
    }

    #[test]
    fn test_unified_cache_lru_eviction() {
        let dir = tempdir().unwrap();
        let cache: ScheduleCache = UnifiedCache::new(2, dir.path());

        for d in 1..=3 {
            cache.put(key(d), vec![matchup("Home", "Away")]).unwrap();
        }
        for d in 1..=3 {
            drop_disk_entry(dir.path(), &key(d));
        }

        assert_eq!(cache.get(&key(1)), None);
        assert!(cache.get(&key(2)).is_some());
        assert!(cache.get(&key(3)).is_some());
    }

    #[test]
    fn test_unified_cache_zero_capacity_is_clamped() {
        let dir = tempdir().unwrap();
        let cache: ScheduleCache = UnifiedCache::new(0, dir.path());

        cache.put(key(5), vec![matchup("Phoenix Suns", "Sacramento Kings")]).unwrap();
        drop_disk_entry(dir.path(), &key(5));

        assert!(cache.get(&key(5)).is_some());
    }

    #[test]
    fn test_unified_cache_ignores_corrupt_disk_entry() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("schedule_2025-01-09.json"), "{not json").unwrap();

        let cache: ScheduleCache = UnifiedCache::new(4, dir.path());
        assert_eq!(cache.get(&key(9)), None);
    }
}
