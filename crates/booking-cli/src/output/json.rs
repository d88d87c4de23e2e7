//! JSON output formatting.

use booking_core::{Booking, CapacityUsage, Totals};

/// A booking in its persisted JSON shape.
pub fn booking_json(booking: &Booking) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(booking)?)
}

pub fn bookings_json<'a>(
    bookings: impl IntoIterator<Item = &'a Booking>,
) -> anyhow::Result<serde_json::Value> {
    let values = bookings
        .into_iter()
        .map(booking_json)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(serde_json::Value::Array(values))
}

pub fn stats_json(totals: &Totals, usage: &CapacityUsage, bookings: usize) -> serde_json::Value {
    serde_json::json!({
        "bookings": bookings,
        "totals": totals,
        "capacity": usage,
    })
}
