// src/db/models/device.rs

//! Device reference records

use crate::error::{Error, Result};
use rusqlite::{Connection, OptionalExtension, Row};

/// A Device represents one machine applications were observed on.
///
/// Names are globally unique and looked up case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: Option<i64>,
    pub name: String,
}

impl Device {
    /// Create a new, not-yet-persisted Device
    pub fn new(name: String) -> Self {
        Self { id: None, name }
    }

    /// Insert this device into the database
    ///
    /// Fails with [`Error::Integrity`] if SQLite reports success but no
    /// generated row id can be retrieved.
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute("INSERT INTO devices (name) VALUES (?1)", [&self.name])?;

        let id = conn.last_insert_rowid();
        if id <= 0 {
            return Err(Error::Integrity(format!(
                "could not retrieve id for device '{}' after insertion",
                self.name
            )));
        }
        self.id = Some(id);
        Ok(id)
    }

    /// Find a device by exact name
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Self>> {
        let mut stmt = conn.prepare("SELECT id, name FROM devices WHERE name = ?1")?;
        let device = stmt.query_row([name], Self::from_row).optional()?;
        Ok(device)
    }

    /// Find a device by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare("SELECT id, name FROM devices WHERE id = ?1")?;
        let device = stmt.query_row([id], Self::from_row).optional()?;
        Ok(device)
    }

    /// List all devices ordered by name
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT id, name FROM devices ORDER BY name")?;
        let devices = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(devices)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
        })
    }
}
