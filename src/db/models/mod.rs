// src/db/models/mod.rs

//! Data models for applist database entities
//!
//! Rust structs corresponding to database tables, with methods for
//! inserting and looking up records. Devices and package managers are
//! reference data: created once, never updated, never deleted. Apps are
//! observation records created in batch.

mod app;
mod device;
mod package_manager;

pub use app::AppRecord;
pub use device::Device;
pub use package_manager::PackageManager;
