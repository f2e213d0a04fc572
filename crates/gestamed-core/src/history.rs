//! Calculation-history persistence.
//!
//! Best-effort telemetry sink for the calculator forms: results are saved
//! after being returned to the caller, from a background thread, and a
//! failed save is logged and forgotten. The displayed result is never
//! retracted or altered because its persistence failed.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use chrono::Utc;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// History store errors. Callers on the lookup path never see these;
/// they only surface through the store's direct API.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Lock poisoned")]
    Poisoned,
}

pub type HistoryResult<T> = Result<T, HistoryError>;

/// Schema for the calculation-history side channel.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS calculations (
    id TEXT PRIMARY KEY,
    calculator_type TEXT NOT NULL,
    input TEXT NOT NULL,                          -- JSON blob
    result TEXT NOT NULL,                         -- JSON blob
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_calculations_type ON calculations(calculator_type);
"#;

/// One saved calculation: opaque input and result blobs keyed by
/// calculator type. The core only produces the `result` blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: String,
    pub calculator_type: String,
    pub input: serde_json::Value,
    pub result: serde_json::Value,
    pub created_at: String,
}

impl CalculationRecord {
    /// New record with a fresh id and timestamp.
    pub fn new(
        calculator_type: impl Into<String>,
        input: serde_json::Value,
        result: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            calculator_type: calculator_type.into(),
            input,
            result,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Thread-safe history store.
pub struct HistoryStore {
    conn: Mutex<Connection>,
}

impl HistoryStore {
    /// Open or create the store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> HistoryResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory store (for testing).
    pub fn open_in_memory() -> HistoryResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Save one record.
    pub fn save(&self, record: &CalculationRecord) -> HistoryResult<()> {
        let conn = self.conn.lock().map_err(|_| HistoryError::Poisoned)?;
        conn.execute(
            "INSERT INTO calculations (id, calculator_type, input, result, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                record.id,
                record.calculator_type,
                serde_json::to_string(&record.input)?,
                serde_json::to_string(&record.result)?,
                record.created_at,
            ],
        )?;
        Ok(())
    }

    /// All records for one calculator type, newest first.
    pub fn list_by_type(&self, calculator_type: &str) -> HistoryResult<Vec<CalculationRecord>> {
        let conn = self.conn.lock().map_err(|_| HistoryError::Poisoned)?;
        let mut stmt = conn.prepare(
            "SELECT id, calculator_type, input, result, created_at
             FROM calculations WHERE calculator_type = ?1
             ORDER BY created_at DESC",
        )?;
        let rows = stmt.query_map([calculator_type], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, calculator_type, input, result, created_at) = row?;
            records.push(CalculationRecord {
                id,
                calculator_type,
                input: serde_json::from_str(&input)?,
                result: serde_json::from_str(&result)?,
                created_at,
            });
        }
        Ok(records)
    }
}

/// Fire-and-forget save: spawns a thread, logs failure, returns
/// immediately. The handle is only joined by tests.
pub fn save_in_background(store: Arc<HistoryStore>, record: CalculationRecord) -> JoinHandle<()> {
    std::thread::spawn(move || {
        if let Err(error) = store.save(&record) {
            tracing::warn!(
                calculator_type = %record.calculator_type,
                %error,
                "failed to persist calculation history"
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_and_list() {
        let store = HistoryStore::open_in_memory().unwrap();
        let record = CalculationRecord::new(
            "medication-lookup",
            json!({"term": "paracetamol"}),
            json!({"categoria": "B"}),
        );
        store.save(&record).unwrap();

        let listed = store.list_by_type("medication-lookup").unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, record.id);
        assert_eq!(listed[0].input["term"], "paracetamol");
    }

    #[test]
    fn test_list_filters_by_type() {
        let store = HistoryStore::open_in_memory().unwrap();
        store
            .save(&CalculationRecord::new("bishop", json!({}), json!({})))
            .unwrap();
        store
            .save(&CalculationRecord::new("medication-lookup", json!({}), json!({})))
            .unwrap();

        assert_eq!(store.list_by_type("bishop").unwrap().len(), 1);
        assert_eq!(store.list_by_type("unknown").unwrap().len(), 0);
    }

    #[test]
    fn test_background_save() {
        let store = Arc::new(HistoryStore::open_in_memory().unwrap());
        let record = CalculationRecord::new("medication-lookup", json!({}), json!({}));
        let id = record.id.clone();

        save_in_background(Arc::clone(&store), record).join().unwrap();

        let listed = store.list_by_type("medication-lookup").unwrap();
        assert_eq!(listed[0].id, id);
    }

    #[test]
    fn test_open_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");
        {
            let store = HistoryStore::open(&path).unwrap();
            store
                .save(&CalculationRecord::new("imc", json!({}), json!({})))
                .unwrap();
        }
        let reopened = HistoryStore::open(&path).unwrap();
        assert_eq!(reopened.list_by_type("imc").unwrap().len(), 1);
    }
}
