// src/error.rs

//! Error types for applist
//!
//! Every failure surfaces at the top level and terminates the current
//! command with a distinct non-zero exit status. Nothing is retried.

use thiserror::Error;

/// Errors that can occur while tracking applications
#[derive(Error, Debug)]
pub enum Error {
    /// Database file cannot be created, opened, or written
    #[error("storage error: {0}")]
    Storage(String),

    /// Underlying SQLite failure (corruption, constraint violation, ...)
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A generated row id could not be retrieved after insertion.
    /// Treated as backing-store corruption, not a recoverable condition.
    #[error("integrity error: {0}")]
    Integrity(String),

    /// The user declined a confirmation prompt. Expected control-flow
    /// exit, not a bug.
    #[error("{0}")]
    UserAborted(String),

    /// An unknown package-manager kind was requested
    #[error("unsupported package manager: {0}")]
    UnsupportedPackageManager(String),

    /// Deliberately unimplemented sub-feature
    #[error("not supported: {0}")]
    NotSupported(String),

    /// External package-manager command failed or was not found
    #[error("external tool error: {0}")]
    ExternalTool(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Windowing / event-loop failure in the desktop view
    #[cfg(feature = "gui")]
    #[error("GUI error: {0}")]
    Gui(String),
}

impl Error {
    /// Process exit status for this error. Each variant maps to its own
    /// code so scripts can distinguish a declined prompt (1) from real
    /// failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UserAborted(_) => 1,
            Error::Storage(_) | Error::Sqlite(_) => 2,
            Error::Integrity(_) => 3,
            Error::UnsupportedPackageManager(_) => 4,
            Error::NotSupported(_) => 5,
            Error::ExternalTool(_) => 6,
            Error::Io(_) => 7,
            #[cfg(feature = "gui")]
            Error::Gui(_) => 8,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let errors = [
            Error::UserAborted("declined".into()),
            Error::Storage("bad file".into()),
            Error::Integrity("no rowid".into()),
            Error::UnsupportedPackageManager("apt".into()),
            Error::NotSupported("deps listing".into()),
            Error::ExternalTool("pacman exited 1".into()),
            Error::Io(std::io::Error::other("io")),
        ];

        let codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        for code in &codes {
            assert_ne!(*code, 0);
        }
        let mut deduped = codes.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), codes.len());
    }

    #[test]
    fn test_sqlite_errors_share_storage_code() {
        let sqlite = Error::Sqlite(rusqlite::Error::InvalidQuery);
        let storage = Error::Storage("unwritable".into());
        assert_eq!(sqlite.exit_code(), storage.exit_code());
    }
}
