// src/ingest.rs

//! Batch ingestion of observed application names
//!
//! The whole batch is inserted as a single transaction: partial failure
//! rolls everything back, so no partial ingestion is ever observable.

use crate::db;
use crate::error::Result;
use rusqlite::{Connection, params};
use tracing::debug;

/// Persist `names` as new application records for the given device and
/// package manager.
///
/// Each name becomes one row. Duplicates, both within the batch and
/// against existing rows, are preserved: the apps table is a log of
/// observations, not a set. An empty batch is a successful no-op.
///
/// Returns the number of rows inserted.
pub fn ingest(
    conn: &mut Connection,
    names: &[String],
    device_id: i64,
    package_manager_id: i64,
) -> Result<usize> {
    if names.is_empty() {
        debug!("Nothing to ingest");
        return Ok(0);
    }

    let count = db::transaction(conn, |tx| {
        let mut stmt =
            tx.prepare("INSERT INTO apps (name, device_id, package_manager_id) VALUES (?1, ?2, ?3)")?;
        for name in names {
            stmt.execute(params![name, device_id, package_manager_id])?;
        }
        Ok(names.len())
    })?;

    debug!(
        "Ingested {} application(s) for device {} via package manager {}",
        count, device_id, package_manager_id
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{AppRecord, Device, PackageManager};
    use crate::db::schema;
    use tempfile::NamedTempFile;

    fn create_test_db() -> (NamedTempFile, Connection) {
        let temp_file = NamedTempFile::new().unwrap();
        let conn = Connection::open(temp_file.path()).unwrap();
        conn.execute("PRAGMA foreign_keys = ON", []).unwrap();
        schema::migrate(&conn).unwrap();
        (temp_file, conn)
    }

    fn seed_refs(conn: &Connection) -> (i64, i64) {
        let device_id = Device::new("laptop".to_string()).insert(conn).unwrap();
        let pm_id = PackageManager::new("flatpak".to_string())
            .insert(conn)
            .unwrap();
        (device_id, pm_id)
    }

    #[test]
    fn test_ingest_n_names_yields_n_rows() {
        let (_temp, mut conn) = create_test_db();
        let (device_id, pm_id) = seed_refs(&conn);

        let names: Vec<String> = ["firefox", "gimp", "inkscape"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let count = ingest(&mut conn, &names, device_id, pm_id).unwrap();

        assert_eq!(count, 3);
        assert_eq!(AppRecord::count(&conn).unwrap(), 3);

        for record in AppRecord::find_by_device(&conn, device_id).unwrap() {
            assert_eq!(record.device_id, device_id);
            assert_eq!(record.package_manager_id, pm_id);
        }
    }

    #[test]
    fn test_ingest_empty_batch_is_noop() {
        let (_temp, mut conn) = create_test_db();
        let (device_id, pm_id) = seed_refs(&conn);

        let count = ingest(&mut conn, &[], device_id, pm_id).unwrap();
        assert_eq!(count, 0);
        assert_eq!(AppRecord::count(&conn).unwrap(), 0);
    }

    #[test]
    fn test_ingest_preserves_duplicates() {
        let (_temp, mut conn) = create_test_db();
        let (device_id, pm_id) = seed_refs(&conn);

        let names: Vec<String> = ["firefox", "firefox"].iter().map(|s| s.to_string()).collect();
        ingest(&mut conn, &names, device_id, pm_id).unwrap();
        // Re-running the same observation appends again
        ingest(&mut conn, &names, device_id, pm_id).unwrap();

        assert_eq!(AppRecord::count(&conn).unwrap(), 4);
    }

    #[test]
    fn test_failed_ingest_leaves_no_rows() {
        let (_temp, mut conn) = create_test_db();
        let (device_id, _pm_id) = seed_refs(&conn);

        // Nonexistent package manager violates the foreign key
        let names: Vec<String> = ["firefox", "gimp"].iter().map(|s| s.to_string()).collect();
        let result = ingest(&mut conn, &names, device_id, 999);

        assert!(result.is_err());
        assert_eq!(AppRecord::count(&conn).unwrap(), 0);
    }
}
