//! Core data types: ticket categories, quantities and the booking record.
//!
//! The persisted shape matches the `event_bookings` blob: a JSON array of
//! camelCase booking objects with `createdAt` in epoch milliseconds.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BookingError;

/// A purchasable ticket kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketCategory {
    Stag,
    Couple,
    Angels,
}

impl TicketCategory {
    /// Every category, in display order.
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Stag,
        TicketCategory::Couple,
        TicketCategory::Angels,
    ];

    /// Display name, also the JSON key in a ticket map.
    pub fn name(&self) -> &'static str {
        match self {
            TicketCategory::Stag => "Stag",
            TicketCategory::Couple => "Couple",
            TicketCategory::Angels => "Angels",
        }
    }

    /// Fixed unit price.
    pub fn unit_price(&self) -> u64 {
        match self {
            TicketCategory::Stag => 6500,
            TicketCategory::Couple => 6000,
            TicketCategory::Angels => 2000,
        }
    }

    /// Attendees admitted per ticket.
    pub fn pax_multiplier(&self) -> u64 {
        match self {
            TicketCategory::Stag => 1,
            TicketCategory::Couple => 2,
            TicketCategory::Angels => 2,
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TicketCategory {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stag" | "stags" => Ok(TicketCategory::Stag),
            "couple" | "couples" => Ok(TicketCategory::Couple),
            "angel" | "angels" => Ok(TicketCategory::Angels),
            other => Err(BookingError::InvalidInput(format!(
                "Unknown ticket category: {} (use stag, couple or angels)",
                other
            ))),
        }
    }
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// Ticket quantities per category. Absent keys read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketQuantities {
    #[serde(rename = "Stag", default, skip_serializing_if = "is_zero")]
    pub stag: u32,
    #[serde(rename = "Couple", default, skip_serializing_if = "is_zero")]
    pub couple: u32,
    #[serde(rename = "Angels", default, skip_serializing_if = "is_zero")]
    pub angels: u32,
}

impl TicketQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Stag => self.stag,
            TicketCategory::Couple => self.couple,
            TicketCategory::Angels => self.angels,
        }
    }

    pub fn set(&mut self, category: TicketCategory, quantity: u32) {
        match category {
            TicketCategory::Stag => self.stag = quantity,
            TicketCategory::Couple => self.couple = quantity,
            TicketCategory::Angels => self.angels = quantity,
        }
    }

    pub fn with(mut self, category: TicketCategory, quantity: u32) -> Self {
        self.set(category, quantity);
        self
    }

    /// True when every quantity is zero.
    pub fn is_empty(&self) -> bool {
        TicketCategory::ALL.iter().all(|c| self.get(*c) == 0)
    }

    /// Non-zero quantities in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TicketCategory, u32)> + '_ {
        TicketCategory::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|(_, qty)| *qty > 0)
    }

    /// Sum of quantity times unit price.
    pub fn total_cost(&self) -> u64 {
        TicketCategory::ALL
            .iter()
            .map(|c| u64::from(self.get(*c)) * c.unit_price())
            .sum()
    }

    /// Sum of quantity times pax multiplier.
    pub fn total_pax(&self) -> u64 {
        TicketCategory::ALL
            .iter()
            .map(|c| u64::from(self.get(*c)) * c.pax_multiplier())
            .sum()
    }

    /// Human-readable list, e.g. `2 Stag, 1 Couple`.
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(c, qty)| format!("{} {}", qty, c))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Opaque booking identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    /// Generate a fresh, time-ordered identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BookingId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One attendee or group's ticket purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredBooking")]
pub struct Booking {
    pub id: BookingId,
    pub name: String,
    pub phone: String,
    pub tickets: TicketQuantities,
    pub total_pax: u64,
    pub amount_paid: u64,
    pub total_cost: u64,
    /// `total_cost - amount_paid` at creation; negative when overpaid.
    pub amount_pending: i64,
    #[serde(serialize_with = "chrono::serde::ts_milliseconds::serialize")]
    pub created_at: DateTime<Utc>,
}

/// On-disk booking shape, including records written by the older
/// single-category form (`ticketType` + `quantity`).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredBooking {
    id: BookingId,
    name: String,
    phone: String,
    #[serde(default)]
    tickets: Option<TicketQuantities>,
    #[serde(default)]
    ticket_type: Option<TicketCategory>,
    #[serde(default)]
    quantity: Option<u32>,
    #[serde(default)]
    total_pax: Option<u64>,
    amount_paid: u64,
    total_cost: u64,
    amount_pending: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

impl From<StoredBooking> for Booking {
    fn from(stored: StoredBooking) -> Self {
        let tickets = match (stored.tickets, stored.ticket_type) {
            (Some(tickets), _) => tickets,
            (None, Some(category)) => {
                TicketQuantities::new().with(category, stored.quantity.unwrap_or(1))
            }
            (None, None) => TicketQuantities::new(),
        };
        let total_pax = stored.total_pax.unwrap_or_else(|| tickets.total_pax());
        Booking {
            id: stored.id,
            name: stored.name,
            phone: stored.phone,
            tickets,
            total_pax,
            amount_paid: stored.amount_paid,
            total_cost: stored.total_cost,
            amount_pending: stored.amount_pending,
            created_at: stored.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(
            "Couples".parse::<TicketCategory>().unwrap(),
            TicketCategory::Couple
        );
        assert_eq!(
            " angel ".parse::<TicketCategory>().unwrap(),
            TicketCategory::Angels
        );
        assert!("vip".parse::<TicketCategory>().is_err());
    }

    #[test]
    fn test_quantities_totals() {
        let tickets = TicketQuantities::new()
            .with(TicketCategory::Couple, 1)
            .with(TicketCategory::Stag, 2);

        assert_eq!(tickets.total_cost(), 6000 + 2 * 6500);
        assert_eq!(tickets.total_pax(), 4);
        assert_eq!(tickets.summary(), "2 Stag, 1 Couple");
        assert!(!tickets.is_empty());
        assert!(TicketQuantities::new().is_empty());
    }

    #[test]
    fn test_quantities_skip_zero_keys() {
        let tickets = TicketQuantities::new().with(TicketCategory::Angels, 1);
        let json = serde_json::to_value(tickets).unwrap();
        assert_eq!(json, serde_json::json!({"Angels": 1}));

        let parsed: TicketQuantities = serde_json::from_str(r#"{"Couple": 3}"#).unwrap();
        assert_eq!(parsed.couple, 3);
        assert_eq!(parsed.stag, 0);
    }

    #[test]
    fn test_booking_json_shape() {
        let booking: Booking = serde_json::from_value(serde_json::json!({
            "id": "seed-3",
            "name": "Mr.Kamalesh",
            "phone": "9788724455",
            "tickets": {"Couple": 1, "Stag": 2},
            "totalPax": 4,
            "amountPaid": 9500,
            "totalCost": 19000,
            "amountPending": 9500,
            "createdAt": 1_700_000_000_000i64
        }))
        .unwrap();

        assert_eq!(booking.id.as_str(), "seed-3");
        assert_eq!(booking.tickets.stag, 2);
        assert_eq!(booking.created_at.timestamp_millis(), 1_700_000_000_000);

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["amountPending"], 9500);
        assert_eq!(value["createdAt"], 1_700_000_000_000i64);
        assert_eq!(value["tickets"]["Stag"], 2);
    }

    #[test]
    fn test_legacy_single_category_record() {
        let booking: Booking = serde_json::from_value(serde_json::json!({
            "id": "old-1",
            "name": "Legacy",
            "phone": "555",
            "ticketType": "Couple",
            "quantity": 2,
            "amountPaid": 0,
            "totalCost": 12000,
            "amountPending": 12000,
            "createdAt": 1_600_000_000_000i64
        }))
        .unwrap();

        assert_eq!(booking.tickets, TicketQuantities::new().with(TicketCategory::Couple, 2));
        assert_eq!(booking.total_pax, 4);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(BookingId::generate(), BookingId::generate());
    }
}
