//! Key-value blob storage backing the ledger.
//!
//! The ledger persists as one whole serialized value under a fixed key, so a
//! backend only needs whole-value `get`/`set` semantics.

mod file;
mod memory;
pub mod traits;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use traits::BlobStore;
