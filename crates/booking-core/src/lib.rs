//! # Booking Core
//!
//! Core library for Bookings - a small ticket ledger for an event organizer.
//!
//! This crate provides the booking data model, the persisted ledger, derived
//! totals, and the contracts for the AI insight and extraction services,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **types**: Ticket categories, quantities and the booking record
//! - **builder**: Validation and construction of new bookings
//! - **ledger**: The capacity-bounded, persist-on-mutate booking store
//! - **aggregate**: Summary totals and capacity usage
//! - **storage**: Key-value blob stores backing the ledger
//! - **query**: Search and recent-activity views
//! - **export**: CSV and JSON exports
//! - **services**: Insight / extraction contracts and the Gemini adapter

pub mod aggregate;
pub mod builder;
pub mod error;
pub mod export;
pub mod fs;
pub mod ledger;
pub mod query;
pub mod seed;
pub mod services;
pub mod storage;
pub mod types;

pub use aggregate::{aggregate, CapacityUsage, Totals};
pub use builder::{build, NewBooking, MAX_AMOUNT};
pub use error::{BookingError, Field, Result, ValidationError};
pub use ledger::{BulkOutcome, LedgerStore, LEDGER_KEY, MAX_CAPACITY};
pub use storage::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use types::{Booking, BookingId, TicketCategory, TicketQuantities};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
