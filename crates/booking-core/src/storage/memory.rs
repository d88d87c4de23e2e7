//! In-memory blob store.

use std::collections::HashMap;

use crate::error::{BookingError, Result};

use super::traits::BlobStore;

/// Blob store held entirely in memory. Used for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryBlobStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the ledger.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent `set` fail.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw value under `key`, if any.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(BookingError::Storage(format!(
                "write to {} rejected",
                key
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
