//! The booking ledger: an ordered, capacity-bounded list of bookings that is
//! written back to its blob store on every mutation.
//!
//! Bookings are kept most-recent-first. Each mutation builds the next
//! sequence, persists it, and only then replaces the in-memory ledger, so a
//! failed write leaves both the store and the ledger untouched.

use crate::aggregate::{aggregate, CapacityUsage, Totals};
use crate::error::{BookingError, Result};
use crate::query;
use crate::storage::BlobStore;
use crate::types::Booking;

/// Blob key the ledger is stored under.
pub const LEDGER_KEY: &str = "event_bookings";

/// Maximum number of bookings the ledger accepts.
pub const MAX_CAPACITY: usize = 250;

/// Result of a bulk append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkOutcome {
    pub accepted: usize,
    pub rejected: usize,
}

enum Stored {
    Missing,
    Parsed(Vec<Booking>),
    Unreadable,
}

fn read_stored<S: BlobStore>(store: &S) -> Stored {
    let raw = match store.get(LEDGER_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Stored::Missing,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read stored bookings; starting empty");
            return Stored::Unreadable;
        }
    };
    match serde_json::from_str::<Vec<Booking>>(&raw) {
        Ok(bookings) => Stored::Parsed(bookings),
        Err(err) => {
            tracing::warn!(error = %err, "stored bookings are corrupt; starting empty");
            Stored::Unreadable
        }
    }
}

/// Read the persisted ledger. Missing, unreadable or corrupt data yields an
/// empty sequence.
pub fn load<S: BlobStore>(store: &S) -> Vec<Booking> {
    match read_stored(store) {
        Stored::Parsed(bookings) => bookings,
        Stored::Missing | Stored::Unreadable => Vec::new(),
    }
}

/// Owned ledger bound to its backing store.
pub struct LedgerStore<S: BlobStore> {
    store: S,
    bookings: Vec<Booking>,
    capacity: usize,
}

impl<S: BlobStore> LedgerStore<S> {
    /// Load the ledger from `store`.
    pub fn open(store: S) -> Self {
        let bookings = load(&store);
        tracing::debug!(count = bookings.len(), "opened ledger");
        Self {
            store,
            bookings,
            capacity: MAX_CAPACITY,
        }
    }

    /// Load the ledger, installing `seed` when nothing (or an empty list) is
    /// stored yet. Corrupt data still opens empty rather than seeded.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Storage` if the seed cannot be persisted.
    pub fn open_or_seed(store: S, seed: Vec<Booking>) -> Result<Self> {
        let (bookings, needs_seed) = match read_stored(&store) {
            Stored::Parsed(bookings) if !bookings.is_empty() => (bookings, false),
            Stored::Parsed(_) | Stored::Missing => (Vec::new(), true),
            Stored::Unreadable => (Vec::new(), false),
        };
        let mut ledger = Self {
            store,
            bookings,
            capacity: MAX_CAPACITY,
        };
        if needs_seed && !seed.is_empty() {
            let mut seed = seed;
            seed.truncate(ledger.capacity);
            ledger.commit(seed)?;
        }
        Ok(ledger)
    }

    /// Override the capacity limit.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// All bookings, most recent first.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots left before the capacity limit.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.bookings.len())
    }

    /// Look up a booking by exact id.
    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id.as_str() == id)
    }

    /// The `n` most recent bookings.
    pub fn recent(&self, n: usize) -> &[Booking] {
        query::recent(&self.bookings, n)
    }

    /// Bookings whose name or phone matches `query`.
    pub fn search(&self, query: &str) -> Vec<&Booking> {
        query::search(&self.bookings, query)
    }

    /// Totals recomputed over the whole ledger.
    pub fn totals(&self) -> Totals {
        aggregate(&self.bookings)
    }

    pub fn capacity_usage(&self) -> CapacityUsage {
        CapacityUsage::new(self.bookings.len(), self.capacity)
    }

    /// Add a booking at the head of the ledger.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::CapacityExceeded` when the ledger is full, or
    /// `BookingError::Storage` if the write fails. The ledger is unchanged
    /// on error.
    pub fn append(&mut self, booking: Booking) -> Result<()> {
        if self.bookings.len() >= self.capacity {
            return Err(BookingError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let mut next = Vec::with_capacity(self.bookings.len() + 1);
        next.push(booking);
        next.extend(self.bookings.iter().cloned());
        self.commit(next)
    }

    /// Add as many bookings as fit, at the head, keeping their input order.
    /// Bookings beyond the remaining capacity are dropped and counted.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Storage` if the write fails; nothing is
    /// inserted in that case.
    pub fn bulk_append(&mut self, bookings: Vec<Booking>) -> Result<BulkOutcome> {
        let offered = bookings.len();
        let accepted = offered.min(self.remaining());
        let outcome = BulkOutcome {
            accepted,
            rejected: offered - accepted,
        };
        if accepted == 0 {
            return Ok(outcome);
        }

        let mut next: Vec<Booking> = bookings.into_iter().take(accepted).collect();
        next.extend(self.bookings.iter().cloned());
        self.commit(next)?;
        if outcome.rejected > 0 {
            tracing::warn!(
                accepted = outcome.accepted,
                rejected = outcome.rejected,
                "capacity reached during bulk append"
            );
        }
        Ok(outcome)
    }

    /// Remove the booking with `id`. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Storage` if the write fails.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let next = self
            .bookings
            .iter()
            .filter(|b| b.id.as_str() != id)
            .cloned()
            .collect();
        self.commit(next)?;
        Ok(true)
    }

    /// Remove every booking.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Storage` if the write fails.
    pub fn clear(&mut self) -> Result<()> {
        self.commit(Vec::new())
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn commit(&mut self, next: Vec<Booking>) -> Result<()> {
        let serialized = serde_json::to_string(&next)?;
        self.store.set(LEDGER_KEY, &serialized)?;
        tracing::debug!(count = next.len(), "persisted ledger");
        self.bookings = next;
        Ok(())
    }
}
