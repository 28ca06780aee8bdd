//! Unit tests for storage functionality

use super::models::{normalize_entries, StoredEntry};
use super::*;
use crate::RunId;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn store_at(dir: &TempDir, contents: &str) -> PickStore {
    let path = dir.path().join("picks.json");
    fs::write(&path, contents).unwrap();
    PickStore::load(path)
}

#[cfg(test)]
mod normalization_tests {
    use super::*;

    #[test]
    fn test_bare_string_entry_upgraded() {
        let records = normalize_entries(json!(["Los Angeles Lakers"]));
        assert_eq!(
            records,
            vec![PickRecord::new(UNKNOWN_DATE, "Los Angeles Lakers", RunId::new(1))]
        );
    }

    #[test]
    fn test_missing_run_defaults_to_one() {
        let records = normalize_entries(json!([
            { "date": "2025-01-02", "team": "Miami Heat" }
        ]));
        assert_eq!(records[0].run, RunId::new(1));
        assert_eq!(records[0].date, "2025-01-02");
    }

    #[test]
    fn test_missing_team_dropped() {
        let records = normalize_entries(json!([
            { "date": "2025-01-02", "run": 2 },
            { "date": "2025-01-03", "team": "   ", "run": 2 },
            { "date": "2025-01-04", "team": "Utah Jazz", "run": 2 }
        ]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].team, "Utah Jazz");
    }

    #[test]
    fn test_unusable_run_values_default_to_one() {
        let records = normalize_entries(json!([
            { "date": "2025-01-02", "team": "A", "run": 0 },
            { "date": "2025-01-03", "team": "B", "run": -4 },
            { "date": "2025-01-04", "team": "C", "run": "3" },
            { "date": "2025-01-05", "team": "D", "run": null },
            { "date": "2025-01-06", "team": "E", "run": 2.5 }
        ]));
        let runs: Vec<u32> = records.iter().map(|r| r.run.as_u32()).collect();
        assert_eq!(runs, vec![1, 1, 3, 1, 1]);
    }

    #[test]
    fn test_unrecognized_entries_skipped() {
        let records = normalize_entries(json!([
            42,
            { "date": "2025-01-02", "team": 17 },
            ["nested"],
            "Chicago Bulls"
        ]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].team, "Chicago Bulls");
    }

    #[test]
    fn test_non_array_document_is_empty() {
        assert!(normalize_entries(json!({ "team": "Miami Heat" })).is_empty());
        assert!(normalize_entries(json!("Miami Heat")).is_empty());
        assert!(normalize_entries(json!(null)).is_empty());
    }

    #[test]
    fn test_record_team_is_trimmed() {
        let entry: StoredEntry =
            serde_json::from_value(json!({ "date": "2025-01-02", "team": " Miami Heat " }))
                .unwrap();
        assert_eq!(entry.normalize().unwrap().team, "Miami Heat");
    }
}

#[cfg(test)]
mod load_tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = PickStore::load(dir.path().join("nope.json"));
        assert!(store.is_empty());
        assert_eq!(store.list_runs(), vec![RunId::new(1)]);
    }

    #[test]
    fn test_load_malformed_json_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_at(&dir, "[{\"date\": \"2025-01-01\", \"team\": ");
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_object_document_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_at(&dir, r#"{"picks": []}"#);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_mixed_legacy_file() {
        let dir = TempDir::new().unwrap();
        let store = store_at(
            &dir,
            r#"[
                "Boston Celtics",
                {"date": "2025-01-02", "team": "Miami Heat"},
                {"date": "2025-01-03", "team": "Utah Jazz", "run": 2}
            ]"#,
        );

        assert_eq!(
            store.records(),
            &[
                PickRecord::new("unknown", "Boston Celtics", RunId::new(1)),
                PickRecord::new("2025-01-02", "Miami Heat", RunId::new(1)),
                PickRecord::new("2025-01-03", "Utah Jazz", RunId::new(2)),
            ]
        );
    }

    #[test]
    fn test_persist_writes_normalized_shape() {
        let dir = TempDir::new().unwrap();
        let mut store = store_at(&dir, r#"["Boston Celtics"]"#);

        store.save("Miami Heat", "2025-01-05", RunId::new(1)).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("picks.json")).unwrap())
                .unwrap();
        assert_eq!(
            written,
            json!([
                { "date": "unknown", "team": "Boston Celtics", "run": 1 },
                { "date": "2025-01-05", "team": "Miami Heat", "run": 1 }
            ])
        );
    }

    #[test]
    fn test_in_memory_store_accepts_saves() {
        let mut store = PickStore::in_memory();
        assert!(store.save("Miami Heat", "2025-01-05", RunId::new(1)).unwrap());
        assert_eq!(store.len(), 1);
    }
}
