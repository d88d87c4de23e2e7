//! Output formatting helpers for bookings (JSON, table, plain text).

mod json;
mod text;

pub use json::{booking_json, bookings_json, stats_json};
pub use text::{print_booking, print_booking_list, print_stats};
