// tests/query.rs

//! Query tests: join ordering, the distinct-application filter, empty
//! stores.

mod common;

use applist::{ingest, list_applications, resolve_device, resolve_package_manager};
use common::{ScriptedPrompt, open, setup_test_db};

/// Record `names` for a device/package-manager pair, creating the
/// references as needed.
fn record(db_path: &std::path::PathBuf, device: &str, pm: &str, names: &[&str]) {
    let mut conn = open(db_path);
    let mut prompt = ScriptedPrompt::always_yes();

    let device_id = resolve_device(&conn, device, &mut prompt).unwrap();
    let pm_id = resolve_package_manager(&conn, pm, &mut prompt).unwrap();

    let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    ingest(&mut conn, &names, device_id, pm_id).unwrap();
}

#[test]
fn test_empty_store_is_empty_not_an_error() {
    let (_temp, db_path) = setup_test_db();
    let conn = open(&db_path);

    assert!(list_applications(&conn, false).unwrap().is_empty());
    assert!(list_applications(&conn, true).unwrap().is_empty());
}

#[test]
fn test_listing_orders_case_insensitively() {
    let (_temp, db_path) = setup_test_db();

    record(&db_path, "d1", "pacman", &["zeta"]);
    record(&db_path, "d2", "pacman", &["Apple"]);
    record(&db_path, "d3", "pacman", &["banana"]);

    let conn = open(&db_path);
    let names: Vec<String> = list_applications(&conn, false)
        .unwrap()
        .into_iter()
        .map(|l| l.app_name)
        .collect();
    assert_eq!(names, ["Apple", "banana", "zeta"]);
}

#[test]
fn test_listing_joins_reference_names() {
    let (_temp, db_path) = setup_test_db();

    record(&db_path, "my_desktop", "flatpak", &["Firefox"]);

    let conn = open(&db_path);
    let listings = list_applications(&conn, false).unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].app_name, "Firefox");
    assert_eq!(listings[0].device_name, "my_desktop");
    assert_eq!(listings[0].package_manager_name, "flatpak");
}

#[test]
fn test_distinct_excludes_cross_installed_names() {
    let (_temp, db_path) = setup_test_db();

    // A on two devices, B on one
    record(&db_path, "device1", "pm1", &["A", "B"]);
    record(&db_path, "device2", "pm1", &["A"]);

    let conn = open(&db_path);
    let distinct = list_applications(&conn, true).unwrap();

    assert_eq!(distinct.len(), 1);
    assert_eq!(distinct[0].app_name, "B");

    // All A rows are excluded, not just collapsed
    assert!(distinct.iter().all(|l| l.app_name != "A"));
    assert_eq!(list_applications(&conn, false).unwrap().len(), 3);
}

#[test]
fn test_distinct_counts_devices_not_observations() {
    let (_temp, db_path) = setup_test_db();

    // Same name recorded repeatedly on a single device, via two
    // different package managers: still exactly one device
    record(&db_path, "laptop", "flatpak", &["firefox"]);
    record(&db_path, "laptop", "pacman", &["firefox", "firefox"]);

    let conn = open(&db_path);
    let distinct = list_applications(&conn, true).unwrap();

    assert_eq!(distinct.len(), 3);
    assert!(distinct.iter().all(|l| l.app_name == "firefox"));
    assert!(distinct.iter().all(|l| l.device_name == "laptop"));
}

#[test]
fn test_distinct_ordering_matches_full_listing() {
    let (_temp, db_path) = setup_test_db();

    record(&db_path, "solo", "pacman", &["Zsh", "alacritty", "Bat"]);

    let conn = open(&db_path);
    let names: Vec<String> = list_applications(&conn, true)
        .unwrap()
        .into_iter()
        .map(|l| l.app_name)
        .collect();
    assert_eq!(names, ["alacritty", "Bat", "Zsh"]);
}
