//! UI primitives for the Bookings CLI.
//!
//! - **Context**: Environment detection (TTY, width, color, timezone)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and owo-colors styles
//! - **Render**: Tables, headers, receipts, hints
//! - **Progress**: indicatif spinner for Gemini calls
//! - **Format**: Truncation, ids, dates and amounts

mod context;
pub mod format;
mod mode;
pub mod progress;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, header, hint, kv, print, print_error, receipt, simple_table, table, Column,
};

pub use progress::Spinner;

pub use format::{format_amount, format_datetime, short_id, truncate};
