//! SQLite-backed vendor directory.

use billsift_core::{AddOutcome, DeleteOutcome, VendorEntry};
use log::{debug, info};
use rusqlite::{params, Connection};
use std::path::Path;

use crate::directory::{StoreError, VendorDirectory, VendorMap};

pub struct SqliteVendorStore {
    conn: Connection,
}

impl SqliteVendorStore {
    /// Open (or create) the database at `path` and make sure the table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        debug!("opened vendor store {}", path.as_ref().display());
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let store = Self { conn: Connection::open_in_memory()? };
        store.init()?;
        Ok(store)
    }

    pub fn init(&self) -> Result<(), StoreError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS vendors (
                bank_name TEXT PRIMARY KEY NOT NULL,
                short_name TEXT NOT NULL,
                category TEXT NOT NULL,
                name_source TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Names of the tables present in the database
    pub fn tables(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }

    pub fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM vendors", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl VendorDirectory for SqliteVendorStore {
    fn list(&self) -> Result<VendorMap, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT bank_name, short_name, category, name_source FROM vendors")?;

        let entries = stmt
            .query_map([], |row| {
                Ok(VendorEntry {
                    key: row.get(0)?,
                    short_name: row.get(1)?,
                    category: row.get(2)?,
                    name_source: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        info!("{} vendors fetched", entries.len());
        Ok(entries.into_iter().map(|e| (e.key.clone(), e)).collect())
    }

    fn add(
        &mut self,
        key: &str,
        short_name: &str,
        category: &str,
        name_source: &str,
    ) -> Result<AddOutcome, StoreError> {
        // Single statement, so concurrent writers cannot both insert the same key.
        let inserted = self.conn.execute(
            "INSERT INTO vendors (bank_name, short_name, category, name_source)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(bank_name) DO NOTHING",
            params![key, short_name, category, name_source],
        )?;

        Ok(if inserted == 0 {
            debug!("vendor {key:?} already present");
            AddOutcome::AlreadyExists
        } else {
            AddOutcome::Created
        })
    }

    fn delete(&mut self, key: &str) -> Result<DeleteOutcome, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM vendors WHERE bank_name = ?1", params![key])?;
        Ok(if removed == 0 {
            DeleteOutcome::NotFound
        } else {
            DeleteOutcome::Deleted
        })
    }
}
