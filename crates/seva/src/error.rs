//! Error types for seva.
//!
//! This module defines all error types used throughout the seva crate,
//! covering the donation store contract, the durable storage backends,
//! and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

use crate::donation::Status;

/// The main error type for seva operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Contract Errors ===
    /// A record with this id is already in the collection.
    #[error("donation {id} already exists")]
    DuplicateId {
        /// The conflicting record id.
        id: i64,
    },

    /// No record with this id is in the collection.
    #[error("donation {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: i64,
    },

    /// A status change out of a terminal state was requested.
    #[error("donation {id} cannot move from {from} to {to}")]
    InvalidTransition {
        /// The record id.
        id: i64,
        /// Current status of the record.
        from: Status,
        /// Requested status.
        to: Status,
    },

    /// The store was used before `initialize` completed.
    #[error("donation store has not been initialized")]
    NotInitialized,

    /// Reading or writing the durable mirror failed.
    ///
    /// The in-memory collection is kept when this is returned from a mutation.
    #[error("durable {operation} failed for key '{key}': {source}")]
    Persistence {
        /// Either `"read"` or `"write"`.
        operation: &'static str,
        /// Storage key of the blob.
        key: String,
        /// The underlying backend error.
        #[source]
        source: Box<Error>,
    },

    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for seva operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Wrap a backend failure during a durable read.
    #[must_use]
    pub fn persistence_read(key: impl Into<String>, source: Error) -> Self {
        Self::Persistence {
            operation: "read",
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a backend failure during a durable write.
    #[must_use]
    pub fn persistence_write(key: impl Into<String>, source: Error) -> Self {
        Self::Persistence {
            operation: "write",
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Check if this error means the target record was absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from the durable mirror.
    #[must_use]
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }

    /// Check if this error is a duplicate id rejection.
    #[must_use]
    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, Self::DuplicateId { .. })
    }
}
