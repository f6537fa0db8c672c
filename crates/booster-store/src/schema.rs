use rusqlite::Connection;

use crate::error::{Result, StoreError};

pub const SCHEMA_VERSION: i64 = 1;

pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA journal_mode = WAL;")?;
    conn.pragma_update(None, "busy_timeout", 5000)?;

    // One row per booster id; viewed_at keeps the first view.
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS metadata (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS viewed_boosters (
            booster_id TEXT PRIMARY KEY,
            viewed_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
        );

        CREATE TABLE IF NOT EXISTS settings (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )?;

    if let Some(found) = get_schema_version(conn)?.filter(|v| *v > SCHEMA_VERSION) {
        return Err(StoreError::InvalidData(format!(
            "database schema v{found} is newer than supported v{SCHEMA_VERSION}"
        )));
    }

    conn.execute(
        "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?1)",
        [SCHEMA_VERSION.to_string()],
    )?;

    tracing::debug!("booster schema v{SCHEMA_VERSION} ready");
    Ok(())
}

pub fn get_schema_version(conn: &Connection) -> Result<Option<i64>> {
    let mut stmt = conn.prepare("SELECT value FROM metadata WHERE key = 'schema_version'")?;
    let version = stmt
        .query_row([], |row| {
            let v: String = row.get(0)?;
            Ok(v.parse::<i64>().unwrap_or(0))
        })
        .ok();
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_creates_tables() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        for table in &["metadata", "viewed_boosters", "settings"] {
            let count: i64 = conn
                .query_row(&format!("SELECT count(*) FROM {table}"), [], |row| {
                    row.get(0)
                })
                .unwrap();
            assert!(count >= 0, "table {table} should exist");
        }
    }

    #[test]
    fn test_schema_version_set() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), Some(SCHEMA_VERSION));
    }

    #[test]
    fn test_newer_schema_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn.execute(
            "UPDATE metadata SET value = ?1 WHERE key = 'schema_version'",
            [(SCHEMA_VERSION + 1).to_string()],
        )
        .unwrap();

        let err = initialize(&conn).unwrap_err();
        assert!(matches!(err, StoreError::InvalidData(_)), "{err}");
        assert_eq!(get_schema_version(&conn).unwrap(), Some(SCHEMA_VERSION + 1));
    }

    #[test]
    fn test_idempotent_initialize() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn.execute("INSERT INTO viewed_boosters (booster_id) VALUES ('a')", [])
            .unwrap();
        initialize(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT count(*) FROM viewed_boosters", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "re-initialize must keep existing records");
    }

    #[test]
    fn test_viewed_at_defaults_to_iso8601() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn.execute("INSERT INTO viewed_boosters (booster_id) VALUES ('a')", [])
            .unwrap();

        let viewed_at: String = conn
            .query_row(
                "SELECT viewed_at FROM viewed_boosters WHERE booster_id = 'a'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(viewed_at.len(), 20, "got {viewed_at}");
        assert!(viewed_at.ends_with('Z'));
    }

    #[test]
    fn test_busy_timeout_set() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        let timeout: i64 = conn
            .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
            .unwrap();
        assert_eq!(timeout, 5000);
    }
}
