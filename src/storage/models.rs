//! Data models for the storage layer

use crate::cli::types::RunId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Date recorded for picks upgraded from the bare-string format.
pub const UNKNOWN_DATE: &str = "unknown";

/// One pick as persisted in the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRecord {
    pub date: String,
    pub team: String,
    pub run: RunId,
}

impl PickRecord {
    pub fn new(date: impl Into<String>, team: impl Into<String>, run: RunId) -> Self {
        Self {
            date: date.into(),
            team: team.into(),
            run,
        }
    }
}

/// A pick together with its position in the global log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedPick {
    pub index: usize,
    #[serde(flatten)]
    pub record: PickRecord,
}

/// Accepts a positive integer (or a numeric string); anything else reads as absent.
fn de_lenient_run<'de, D>(deserializer: D) -> Result<Option<RunId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    let n = match raw {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(n
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > 0)
        .map(RunId::new))
}

/// Any entry shape the pick file has held over time
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredEntry {
    /// Current format (the `run` field may be missing in single-run files)
    Record {
        #[serde(default)]
        date: Option<String>,
        #[serde(default)]
        team: Option<String>,
        #[serde(default, deserialize_with = "de_lenient_run")]
        run: Option<RunId>,
    },
    /// Oldest format: just the team name
    Legacy(String),
}

impl StoredEntry {
    /// Upgrade to the uniform record shape; entries without a team are dropped.
    pub(crate) fn normalize(self) -> Option<PickRecord> {
        let (date, team, run) = match self {
            StoredEntry::Record { date, team, run } => (date, team?, run),
            StoredEntry::Legacy(team) => (None, team, None),
        };
        let team = team.trim();
        if team.is_empty() {
            return None;
        }
        Some(PickRecord {
            date: date.unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            team: team.to_string(),
            run: run.unwrap_or_default(),
        })
    }
}

/// Normalize a parsed pick document. A non-array document yields no picks;
/// array elements that match no known shape are skipped.
pub(crate) fn normalize_entries(doc: Value) -> Vec<PickRecord> {
    let Value::Array(items) = doc else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<StoredEntry>(item).ok())
        .filter_map(StoredEntry::normalize)
        .collect()
}
