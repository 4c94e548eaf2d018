mod error;

#[cfg(test)]
mod tests;

pub use error::HistoryError;

use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One submitted structure description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub structure_name: String,
    pub structure_content: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
}

/// Per-owner log of submitted descriptions, backed by SQLite
pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    /// Create a new in-memory store
    pub fn open_in_memory() -> Result<Self, HistoryError> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Open (or create) a store file
    pub fn open(path: &Path) -> Result<Self, HistoryError> {
        debug!("Opening history store at {}", path.display());
        let store = Self {
            conn: Connection::open(path)?,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), HistoryError> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS structure_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                structure_name TEXT NOT NULL,
                structure_content TEXT NOT NULL,
                owner TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_history_owner
                ON structure_history(owner, created_at);
            "#,
        )?;
        Ok(())
    }

    /// Store a submission and return its id
    pub fn record(&self, name: &str, content: &str, owner: &str) -> Result<i64, HistoryError> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        self.conn.execute(
            "INSERT INTO structure_history (structure_name, structure_content, owner, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![name, content, owner, created_at],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Recorded history entry {} for {}", id, owner);
        Ok(id)
    }

    /// All records for `owner`, newest first
    pub fn list_for_owner(&self, owner: &str) -> Result<Vec<HistoryRecord>, HistoryError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, structure_name, structure_content, owner, created_at
             FROM structure_history
             WHERE owner = ?1
             ORDER BY created_at DESC, id DESC",
        )?;

        let rows = stmt
            .query_map(params![owner], read_row)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(into_record).collect()
    }

    /// Fetch a record that must belong to `owner`
    pub fn get(&self, id: i64, owner: &str) -> Result<HistoryRecord, HistoryError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, structure_name, structure_content, owner, created_at
                 FROM structure_history WHERE id = ?1",
                params![id],
                read_row,
            )
            .optional()?
            .ok_or(HistoryError::NotFound(id))?;

        let record = into_record(row)?;
        if record.owner != owner {
            return Err(HistoryError::Unauthorized {
                id,
                owner: owner.to_string(),
            });
        }
        Ok(record)
    }

    /// Delete a record that must belong to `owner`
    pub fn delete(&self, id: i64, owner: &str) -> Result<(), HistoryError> {
        self.get(id, owner)?;
        self.conn
            .execute("DELETE FROM structure_history WHERE id = ?1", params![id])?;
        debug!("Deleted history entry {}", id);
        Ok(())
    }
}

type RawRow = (i64, String, String, String, String);

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
}

fn into_record(
    (id, structure_name, structure_content, owner, created_at): RawRow,
) -> Result<HistoryRecord, HistoryError> {
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|_| HistoryError::Timestamp {
            id,
            value: created_at.clone(),
        })?
        .with_timezone(&Utc);

    Ok(HistoryRecord {
        id,
        structure_name,
        structure_content,
        owner,
        created_at,
    })
}
