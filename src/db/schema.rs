// src/db/schema.rs

//! Database schema definitions for applist
//!
//! Defines the three core tables (devices, package managers, applications)
//! and tracks a schema version so the layout can evolve. The schema is
//! fixed and additive-only; only version 1 exists today.

use crate::error::Result;
use rusqlite::Connection;
use tracing::{debug, info};

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the schema version tracking table
fn init_schema_version(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    init_schema_version(conn)?;

    let version = conn
        .query_row(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    Ok(version)
}

/// Set the schema version
fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Create any missing tables to bring the database up to date
pub fn migrate(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;
    debug!("Current schema version: {}", current_version);

    if current_version >= SCHEMA_VERSION {
        debug!("Schema is up to date");
        return Ok(());
    }

    for version in (current_version + 1)..=SCHEMA_VERSION {
        info!("Applying schema version {}", version);
        apply_migration(conn, version)?;
        set_schema_version(conn, version)?;
    }

    Ok(())
}

fn apply_migration(conn: &Connection, version: i32) -> Result<()> {
    match version {
        1 => migrate_v1(conn),
        _ => panic!("Unknown schema version: {}", version),
    }
}

/// Initial schema - Version 1
///
/// - devices: one row per machine, name unique
/// - package_managers: one row per package-management tool, name unique
/// - apps: one row per observed installed-application record; names are
///   deliberately not unique, the table is a log of observations
fn migrate_v1(conn: &Connection) -> Result<()> {
    debug!("Creating schema version 1");

    conn.execute_batch(
        "
        -- Devices: one machine per row
        CREATE TABLE devices (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        );

        -- Package managers: one tool per row (flatpak, pacman, ...)
        CREATE TABLE package_managers (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        );

        -- Applications: observed installed-application records.
        -- The same name may appear for several devices and managers.
        CREATE TABLE apps (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            device_id INTEGER NOT NULL,
            package_manager_id INTEGER NOT NULL,
            FOREIGN KEY (device_id) REFERENCES devices (id),
            FOREIGN KEY (package_manager_id) REFERENCES package_managers (id)
        );

        CREATE INDEX idx_apps_name ON apps(name);
        CREATE INDEX idx_apps_device_id ON apps(device_id);
        ",
    )?;

    Ok(())
}
