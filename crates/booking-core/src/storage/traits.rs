//! Blob store trait definition.

use crate::error::Result;

/// Whole-value key-value storage.
///
/// Implementations must ensure:
/// - `set` replaces the previous value wholesale (last writer wins)
/// - a reader never observes a partially written value
///
/// There is no cross-process locking; a single in-process owner is assumed.
pub trait BlobStore {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Storage` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Storage` if the write fails. A failed write
    /// leaves the previous value in place.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
