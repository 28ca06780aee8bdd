//! Pick log file management: loading, normalization and persistence

use super::models::{normalize_entries, PickRecord};
use crate::core::{try_read_to_string, write_string};
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Owner of the ordered pick log.
///
/// The log is read in full on load and written in full after every mutation.
/// A store without a path lives purely in memory.
#[derive(Debug, Clone)]
pub struct PickStore {
    pub(crate) path: Option<PathBuf>,
    pub(crate) picks: Vec<PickRecord>,
}

impl PickStore {
    /// Load the log at `path`.
    ///
    /// Never fails: a missing, unreadable or malformed file gives an empty
    /// log, and legacy entries are upgraded to the current record shape.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let picks = match try_read_to_string(&path) {
            Some(contents) => Self::parse(&contents, &path),
            None => {
                debug!("no pick file at {}, starting empty", path.display());
                Vec::new()
            }
        };
        Self {
            path: Some(path),
            picks,
        }
    }

    /// A store that never touches the file system
    pub fn in_memory() -> Self {
        Self {
            path: None,
            picks: Vec::new(),
        }
    }

    fn parse(contents: &str, path: &Path) -> Vec<PickRecord> {
        match serde_json::from_str(contents) {
            Ok(doc) => normalize_entries(doc),
            Err(e) => {
                warn!("ignoring malformed pick file {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Rewrite the whole log to disk
    pub(crate) fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.picks)?;
        write_string(path, &json)?;
        debug!("wrote {} picks to {}", self.picks.len(), path.display());
        Ok(())
    }

    /// Every record in log order
    pub fn records(&self) -> &[PickRecord] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}
