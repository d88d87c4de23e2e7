//! Construction and validation of new bookings.

use chrono::{DateTime, SubsecRound, Utc};

use crate::error::{Field, ValidationError};
use crate::types::{Booking, BookingId, TicketCategory, TicketQuantities};

/// Largest amount paid or total cost a booking may carry.
///
/// Keeps `amount_pending = total_cost - amount_paid` exact in an `i64`.
pub const MAX_AMOUNT: u64 = i64::MAX as u64;

/// Build a booking stamped with a fresh id and the current time.
///
/// # Errors
///
/// Returns `ValidationError::MissingField` if `name` or `phone` is blank,
/// `ValidationError::NoTicketsSelected` if every quantity is zero, or
/// `ValidationError::AmountTooLarge` if `amount_paid` exceeds [`MAX_AMOUNT`].
pub fn build(
    name: &str,
    phone: &str,
    tickets: TicketQuantities,
    amount_paid: u64,
) -> Result<Booking, ValidationError> {
    NewBooking::new(name, phone)
        .with_tickets(tickets)
        .with_amount_paid(amount_paid)
        .build()
}

/// Builder for creating new bookings.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub name: String,
    pub phone: String,
    pub tickets: TicketQuantities,
    pub amount_paid: u64,
    /// Creation time (defaults to now at build time)
    pub created_at: Option<DateTime<Utc>>,
}

impl NewBooking {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            tickets: TicketQuantities::default(),
            amount_paid: 0,
            created_at: None,
        }
    }

    pub fn with_tickets(mut self, tickets: TicketQuantities) -> Self {
        self.tickets = tickets;
        self
    }

    pub fn with_quantity(mut self, category: TicketCategory, quantity: u32) -> Self {
        self.tickets.set(category, quantity);
        self
    }

    pub fn with_amount_paid(mut self, amount_paid: u64) -> Self {
        self.amount_paid = amount_paid;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Validate and derive cost, pax and balance.
    ///
    /// Name and phone are stored trimmed; the timestamp is cut to whole
    /// milliseconds, the precision the blob keeps.
    pub fn build(self) -> Result<Booking, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField(Field::Name));
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(ValidationError::MissingField(Field::Phone));
        }
        if self.tickets.is_empty() {
            return Err(ValidationError::NoTicketsSelected);
        }

        let total_cost = self.tickets.total_cost();
        let amount_pending = pending(total_cost, self.amount_paid)?;
        Ok(Booking {
            id: BookingId::generate(),
            name: name.to_string(),
            phone: phone.to_string(),
            tickets: self.tickets,
            total_pax: self.tickets.total_pax(),
            amount_paid: self.amount_paid,
            total_cost,
            amount_pending,
            created_at: to_millis(self.created_at.unwrap_or_else(Utc::now)),
        })
    }
}

/// Signed balance; negative when a booking is overpaid.
pub(crate) fn pending(total_cost: u64, amount_paid: u64) -> Result<i64, ValidationError> {
    let cost = i64::try_from(total_cost).map_err(|_| ValidationError::AmountTooLarge(total_cost))?;
    let paid = i64::try_from(amount_paid).map_err(|_| ValidationError::AmountTooLarge(amount_paid))?;
    // Both operands are non-negative, so the difference cannot overflow.
    Ok(cost - paid)
}

/// Drop sub-millisecond precision.
pub(crate) fn to_millis(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(3)
}
