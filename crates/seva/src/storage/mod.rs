//! Durable storage layer for seva.
//!
//! The donation store persists its whole collection as one serialized blob
//! under a single key. Anything that can get and put such a blob implements
//! [`BlobStore`]:
//!
//! - [`SqliteBlobStore`] keeps blobs in a `SQLite` database file.
//! - [`MemoryBlobStore`] keeps blobs in a map and can simulate write failures.

pub mod migrations;
pub mod schema;
mod sqlite;

use std::collections::HashMap;

use tracing::trace;

use crate::error::{Error, Result};

pub use sqlite::SqliteBlobStore;

/// A key-value store holding whole serialized blobs.
///
/// `put` replaces the value under a key in one step; there are no partial
/// writes and no transactions spanning keys.
pub trait BlobStore {
    /// Read the blob stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn put(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<B: BlobStore + ?Sized> BlobStore for &mut B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).put(key, value)
    }
}

impl<B: BlobStore + ?Sized> BlobStore for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).put(key, value)
    }
}

/// In-memory blob store.
///
/// Used by tests and as a scratch backend. Reads and writes can be made to
/// fail to exercise the store's error paths.
#[derive(Debug, Default, Clone)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryBlobStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one blob already present.
    #[must_use]
    pub fn with_blob(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.blobs.insert(key.into(), value.into());
        store
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Make subsequent reads fail (or succeed again).
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Peek at a stored blob without going through the trait.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(Error::Io(std::io::Error::other("simulated read failure")));
        }
        Ok(self.blobs.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Io(std::io::Error::other("simulated write failure")));
        }
        trace!(key, bytes = value.len(), "Writing blob to memory");
        self.blobs.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
