// src/db/models/app.rs

//! Observed installed-application records

use crate::error::{Error, Result};
use rusqlite::{Connection, Row, params};

/// An AppRecord is one observation of an installed application on a
/// device via a package manager. Names are not unique; the table is a
/// log, not a set.
#[derive(Debug, Clone)]
pub struct AppRecord {
    pub id: Option<i64>,
    pub name: String,
    pub device_id: i64,
    pub package_manager_id: i64,
}

impl AppRecord {
    pub fn new(name: String, device_id: i64, package_manager_id: i64) -> Self {
        Self {
            id: None,
            name,
            device_id,
            package_manager_id,
        }
    }

    /// Insert this record into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO apps (name, device_id, package_manager_id) VALUES (?1, ?2, ?3)",
            params![&self.name, self.device_id, self.package_manager_id],
        )?;

        let id = conn.last_insert_rowid();
        if id <= 0 {
            return Err(Error::Integrity(format!(
                "could not retrieve id for app '{}' after insertion",
                self.name
            )));
        }
        self.id = Some(id);
        Ok(id)
    }

    /// Count all application records
    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM apps", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Find all records for a device
    pub fn find_by_device(conn: &Connection, device_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, device_id, package_manager_id FROM apps WHERE device_id = ?1",
        )?;
        let records = stmt
            .query_map([device_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            device_id: row.get(2)?,
            package_manager_id: row.get(3)?,
        })
    }
}
