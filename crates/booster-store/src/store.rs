use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::{env, fs};

use rusqlite::{Connection, OptionalExtension, params};

use crate::error::{Result, StoreError};
use crate::schema;

/// Database filename inside the data directory.
pub const DATABASE_FILE: &str = "boosters.db";

/// Default base directory for demo storage.
pub fn default_data_dir() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".booster-demo")
}

/// A persisted "this booster was shown" fact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewedRecord {
    pub booster_id: String,
    /// ISO-8601 UTC time of the first view.
    pub viewed_at: String,
}

/// Synchronous SQLite store for viewed records and settings.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database at `path`, creating parent directories.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::InvalidData(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // --- Viewed records ---

    /// Idempotent: a second call keeps the original `viewed_at`.
    pub fn mark_viewed(&self, booster_id: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO viewed_boosters (booster_id) VALUES (?1)",
            params![booster_id],
        )?;
        Ok(())
    }

    pub fn is_viewed(&self, booster_id: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM viewed_boosters WHERE booster_id = ?1",
                [booster_id],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn viewed_ids(&self) -> Result<HashSet<String>> {
        let mut stmt = self.conn.prepare("SELECT booster_id FROM viewed_boosters")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<_, _>>()?;
        Ok(ids)
    }

    /// All records, oldest view first.
    pub fn viewed_records(&self) -> Result<Vec<ViewedRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT booster_id, viewed_at FROM viewed_boosters ORDER BY viewed_at, rowid",
        )?;
        let records = stmt
            .query_map([], |row| {
                Ok(ViewedRecord {
                    booster_id: row.get(0)?,
                    viewed_at: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<_, _>>()?;
        Ok(records)
    }

    /// Removing an id that was never viewed is a no-op.
    pub fn remove_viewed(&self, booster_id: &str) -> Result<()> {
        let rows = self.conn.execute(
            "DELETE FROM viewed_boosters WHERE booster_id = ?1",
            [booster_id],
        )?;
        if rows == 0 {
            tracing::debug!(booster = booster_id, "no viewed record to remove");
        }
        Ok(())
    }
}
