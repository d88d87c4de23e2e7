//! Export formats (CSV, JSON). You own your data.

use crate::error::Result;
use crate::types::Booking;

/// CSV header row.
pub const CSV_HEADER: [&str; 9] = [
    "ID",
    "Name",
    "Phone",
    "Tickets",
    "Total Pax",
    "Amount Paid",
    "Amount Pending",
    "Total Cost",
    "Date Created",
];

const CSV_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render bookings as CSV, header row first, one booking per line.
pub fn to_csv(bookings: &[Booking]) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_HEADER.iter().map(|h| h.to_string()));
    for b in bookings {
        push_row(
            &mut out,
            [
                b.id.to_string(),
                b.name.clone(),
                b.phone.clone(),
                b.tickets.summary(),
                b.total_pax.to_string(),
                b.amount_paid.to_string(),
                b.amount_pending.to_string(),
                b.total_cost.to_string(),
                b.created_at.format(CSV_DATE_FORMAT).to_string(),
            ]
            .into_iter(),
        );
    }
    out
}

fn push_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let line = fields
        .map(|f| escape_field(&f))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
    out.push('\n');
}

/// Quote a field when it contains a delimiter, quote or line break.
fn escape_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Pretty JSON array in the persisted booking format.
///
/// # Errors
///
/// Returns `BookingError::Serialization` if encoding fails.
pub fn to_json(bookings: &[Booking]) -> Result<String> {
    Ok(serde_json::to_string_pretty(bookings)?)
}
