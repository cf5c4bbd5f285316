//! SQLite storage for dataset metadata.
//!
//! Columns are stored as a JSON array next to the raw samples document; the
//! operation defined for a dataset lives in its own table. Every request opens
//! its own connection to the configured database file.

use common::model::meta::Metadata;
use log::info;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

use crate::error::StoreError;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS metas (
        id      TEXT PRIMARY KEY,
        api_id  TEXT NOT NULL,
        columns TEXT NOT NULL,
        samples TEXT NOT NULL DEFAULT ''
    );
    CREATE TABLE IF NOT EXISTS operations (
        meta_id     TEXT PRIMARY KEY REFERENCES metas(id),
        title       TEXT NOT NULL,
        description TEXT NOT NULL,
        method      TEXT NOT NULL,
        end_point   TEXT NOT NULL
    );
";

const DEMO_META: &str = include_str!("../../seed/demo_meta.json");

/// Location of the database, shared with the handlers as `web::Data`.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    /// Creates the schema and, on an empty database, the demo dataset.
    pub fn init(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute_batch(SCHEMA)?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM metas", [], |row| row.get(0))?;
        if count == 0 {
            let demo: Metadata = serde_json::from_str(DEMO_META)?;
            insert_meta(&conn, &demo)?;
            info!("seeded demo metadata {} into {}", demo.id, self.path.display());
        }
        Ok(())
    }
}

/// Inserts or replaces a metadata record.
pub fn insert_meta(conn: &Connection, meta: &Metadata) -> Result<(), StoreError> {
    conn.execute(
        "INSERT OR REPLACE INTO metas (id, api_id, columns, samples) VALUES (?1, ?2, ?3, ?4)",
        params![
            &meta.id,
            &meta.api_id,
            serde_json::to_string(&meta.columns)?,
            &meta.samples
        ],
    )?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Fresh initialised database inside a temporary directory. Keep the
    /// `TempDir` alive for as long as the database is used.
    pub(crate) fn temp_database() -> (TempDir, Database) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db = Database::new(dir.path().join("metas.sqlite"));
        db.init().expect("init database");
        (dir, db)
    }

    #[test]
    fn demo_metadata_is_consistent() {
        let demo: Metadata = serde_json::from_str(DEMO_META).unwrap();
        assert_eq!(demo.id, "7");
        assert!(demo.check_samples().is_ok());
        assert!(demo.sample_set().unwrap().len() > common::model::samples::MAX_SAMPLE_ROWS);
    }

    #[test]
    fn init_seeds_once() {
        let (_dir, db) = temp_database();
        db.init().unwrap();

        let conn = db.connect().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM metas", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
