// src/lib.rs

//! applist
//!
//! Tracks which applications are installed on which devices via which
//! package manager, in a local SQLite database.
//!
//! # Architecture
//!
//! - Normalized schema: devices and package managers are unique
//!   reference rows; apps are a log of observations referencing both
//! - Reference resolution prompts before creating, through an injected
//!   confirmation capability
//! - Ingestion is one transaction per batch; queries are scoped
//!   connections; everything is synchronous and single-threaded

pub mod cli;
pub mod commands;
pub mod db;
mod error;
pub mod ingest;
pub mod query;
pub mod resolver;
pub mod sources;

#[cfg(feature = "gui")]
pub mod gui;

pub use error::{Error, Result};
pub use ingest::ingest;
pub use query::{AppListing, list_applications};
pub use resolver::{ConfirmPrompt, TerminalPrompt, resolve_device, resolve_package_manager};
pub use sources::{PackageManagerKind, PacmanUtil};
