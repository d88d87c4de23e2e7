//! Demo bookings installed on first launch.
//!
//! These mirror the organizer's opening guest sheet, so their costs reflect
//! the negotiated amounts on that sheet rather than the list prices.

use chrono::{DateTime, Duration, Utc};

use crate::builder::to_millis;
use crate::types::{Booking, BookingId, TicketCategory, TicketQuantities};

struct SeedRow {
    id: &'static str,
    name: &'static str,
    phone: &'static str,
    tickets: TicketQuantities,
    total_pax: u64,
    amount_paid: u32,
    total_cost: u32,
    age_ms: i64,
}

/// The demo ledger, timestamped relative to `now`.
pub fn demo_bookings(now: DateTime<Utc>) -> Vec<Booking> {
    let rows = [
        SeedRow {
            id: "seed-1",
            name: "Ms.Deepa",
            phone: "9486610479",
            tickets: TicketQuantities::new().with(TicketCategory::Angels, 1),
            total_pax: 2,
            amount_paid: 2000,
            total_cost: 4000,
            age_ms: 4_000_000,
        },
        SeedRow {
            id: "seed-2",
            name: "Ms.Akshaya",
            phone: "8270580083",
            tickets: TicketQuantities::new().with(TicketCategory::Couple, 1),
            total_pax: 2,
            amount_paid: 1200,
            total_cost: 1200,
            age_ms: 3_000_000,
        },
        SeedRow {
            id: "seed-3",
            name: "Mr.Kamalesh",
            phone: "9788724455",
            tickets: TicketQuantities::new()
                .with(TicketCategory::Couple, 1)
                .with(TicketCategory::Stag, 2),
            total_pax: 4,
            amount_paid: 9500,
            total_cost: 19000,
            age_ms: 2_000_000,
        },
        SeedRow {
            id: "seed-4",
            name: "Mr.Alwin surya",
            phone: "8939159322",
            tickets: TicketQuantities::new()
                .with(TicketCategory::Couple, 1)
                .with(TicketCategory::Stag, 1),
            total_pax: 3,
            amount_paid: 12500,
            total_cost: 12500,
            age_ms: 1_000_000,
        },
    ];

    rows.into_iter()
        .map(|row| Booking {
            id: BookingId::from(row.id),
            name: row.name.to_string(),
            phone: row.phone.to_string(),
            tickets: row.tickets,
            total_pax: row.total_pax,
            amount_paid: u64::from(row.amount_paid),
            total_cost: u64::from(row.total_cost),
            amount_pending: i64::from(row.total_cost) - i64::from(row.amount_paid),
            created_at: to_millis(now - Duration::milliseconds(row.age_ms)),
        })
        .collect()
}
