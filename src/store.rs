//! Local record store
//!
//! Offline college lookup backed by SQLite. Seeded once from the bundled
//! dataset, read-mostly afterwards.

mod dataset;
mod schema;

pub use dataset::{parse_dataset, BUNDLED_DATASET};
pub use schema::*;

use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Dataset parse error: {0}")]
    Dataset(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Thread-safe store handle
#[derive(Clone)]
pub struct RecordStore {
    conn: Arc<Mutex<Connection>>,
}

impl RecordStore {
    /// Open or create the store at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.run_migrations()?;
        Ok(store)
    }

    /// Open an in-memory store (for testing)
    #[allow(dead_code)] // Used in tests
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    // ==================== Record Operations ====================

    /// Number of records currently stored
    pub fn count(&self) -> StoreResult<i64> {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM colleges", [], |row| row.get(0))
            .map_err(StoreError::from)
    }

    /// Insert a single record, returning it with its assigned id
    #[allow(dead_code)] // Used in tests
    pub fn insert(&self, record: &CollegeRecord) -> StoreResult<CollegeRecord> {
        let conn = self.conn.lock().unwrap();
        insert_record(&conn, record)
    }

    /// Load a batch of records in one transaction.
    ///
    /// Records with an empty name are skipped. Duplicate names load as
    /// distinct rows.
    pub fn bulk_load(&self, records: &[CollegeRecord]) -> StoreResult<usize> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        let mut loaded = 0;
        for record in records {
            if record.name.trim().is_empty() {
                tracing::warn!(
                    district = %record.district,
                    "Skipping college record with empty name"
                );
                continue;
            }
            insert_record(&tx, record)?;
            loaded += 1;
        }
        tx.commit()?;
        Ok(loaded)
    }

    /// All records in id order
    pub fn get_all(&self) -> StoreResult<Vec<CollegeRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, name, district, kind, courses, scholarships, link
             FROM colleges ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], parse_record_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    /// Case-insensitive substring search across name, district and courses.
    ///
    /// Lowercasing happens on the Rust side (SQLite LIKE only folds ASCII).
    /// Results keep ascending id order; no relevance ranking.
    pub fn search(&self, query: &str) -> StoreResult<Vec<CollegeRecord>> {
        let needle = query.to_lowercase();
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&needle)
                    || r.district.to_lowercase().contains(&needle)
                    || r.courses.to_lowercase().contains(&needle)
            })
            .collect())
    }

    // ==================== Seeding ====================

    /// Seed from a dataset document if the store is empty.
    ///
    /// The count check and the load are not atomic; call once at startup
    /// before the server accepts requests.
    pub fn ensure_seeded(&self, dataset_json: &str) -> StoreResult<usize> {
        if self.count()? > 0 {
            return Ok(0);
        }
        let records = parse_dataset(dataset_json)?;
        let loaded = self.bulk_load(&records)?;
        tracing::info!(loaded, "Seeded college store from bundled dataset");
        Ok(loaded)
    }
}

fn insert_record(conn: &Connection, record: &CollegeRecord) -> StoreResult<CollegeRecord> {
    conn.execute(
        "INSERT INTO colleges (name, name_key, district, kind, courses, scholarships, link)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            record.name,
            record.name_key(),
            record.district,
            record.kind,
            record.courses,
            record.scholarships,
            record.link,
        ],
    )?;

    let id = conn.last_insert_rowid();
    Ok(CollegeRecord {
        id: Some(id),
        ..record.clone()
    })
}

fn parse_record_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CollegeRecord> {
    Ok(CollegeRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        district: row.get(2)?,
        kind: row.get(3)?,
        courses: row.get(4)?,
        scholarships: row.get(5)?,
        link: row.get(6)?,
    })
}
