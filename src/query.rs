// src/query.rs

//! Read-side queries: applications joined with their device and
//! package-manager names.

use crate::error::Result;
use rusqlite::{Connection, Row};
use tracing::debug;

/// One row of the joined application listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppListing {
    pub app_name: String,
    pub device_name: String,
    pub package_manager_name: String,
}

impl AppListing {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            app_name: row.get(0)?,
            device_name: row.get(1)?,
            package_manager_name: row.get(2)?,
        })
    }
}

const LIST_ALL_SQL: &str = "
    SELECT apps.name, devices.name, package_managers.name
    FROM apps
    INNER JOIN devices ON devices.id = apps.device_id
    INNER JOIN package_managers ON package_managers.id = apps.package_manager_id
    ORDER BY LOWER(apps.name), apps.id";

// Distinct applications: names recorded under exactly one device across
// the whole store, regardless of how many times recorded. All rows for
// a surviving name are returned, not just one.
const LIST_DISTINCT_SQL: &str = "
    SELECT apps.name, devices.name, package_managers.name
    FROM apps
    INNER JOIN devices ON devices.id = apps.device_id
    INNER JOIN package_managers ON package_managers.id = apps.package_manager_id
    WHERE apps.name IN (
        SELECT name FROM apps
        GROUP BY name
        HAVING COUNT(DISTINCT device_id) = 1
    )
    ORDER BY LOWER(apps.name), apps.id";

/// List all applications joined to device and package-manager names,
/// ordered case-insensitively by application name (ties broken by row
/// id, so the order is deterministic).
///
/// With `distinct`, only applications recorded under exactly one device
/// are returned. An empty store yields an empty vec, not an error.
pub fn list_applications(conn: &Connection, distinct: bool) -> Result<Vec<AppListing>> {
    let sql = if distinct {
        LIST_DISTINCT_SQL
    } else {
        LIST_ALL_SQL
    };

    let mut stmt = conn.prepare(sql)?;
    let listings = stmt
        .query_map([], AppListing::from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    debug!(
        "Query returned {} application row(s) (distinct={})",
        listings.len(),
        distinct
    );
    Ok(listings)
}
