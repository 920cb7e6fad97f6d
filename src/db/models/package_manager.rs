// src/db/models/package_manager.rs

//! Package-manager reference records

use crate::error::{Error, Result};
use rusqlite::{Connection, OptionalExtension, Row};

/// A PackageManager represents one package-management tool, e.g.
/// "flatpak" or "pacman". Same lifecycle as [`super::Device`]: unique
/// name, created once, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    pub id: Option<i64>,
    pub name: String,
}

impl PackageManager {
    pub fn new(name: String) -> Self {
        Self { id: None, name }
    }

    /// Insert this package manager into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO package_managers (name) VALUES (?1)",
            [&self.name],
        )?;

        let id = conn.last_insert_rowid();
        if id <= 0 {
            return Err(Error::Integrity(format!(
                "could not retrieve id for package manager '{}' after insertion",
                self.name
            )));
        }
        self.id = Some(id);
        Ok(id)
    }

    /// Find a package manager by exact name
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Self>> {
        let mut stmt = conn.prepare("SELECT id, name FROM package_managers WHERE name = ?1")?;
        let pm = stmt.query_row([name], Self::from_row).optional()?;
        Ok(pm)
    }

    /// List all package managers ordered by name
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT id, name FROM package_managers ORDER BY name")?;
        let pms = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(pms)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
        })
    }
}
