//! Derived totals over the ledger.

use serde::Serialize;

use crate::types::Booking;

/// Summary totals across every booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Sum of amount paid
    pub paid: u64,
    /// Sum of amount pending (may include overpayments)
    pub pending: i64,
    /// Gross booking value
    pub total: u64,
    /// Attendees booked
    pub pax: u64,
}

/// Fold the bookings into summary totals. Order does not matter.
///
/// Sums saturate at the bounds of their type instead of overflowing.
pub fn aggregate(bookings: &[Booking]) -> Totals {
    bookings.iter().fold(Totals::default(), |acc, b| Totals {
        paid: acc.paid.saturating_add(b.amount_paid),
        pending: acc.pending.saturating_add(b.amount_pending),
        total: acc.total.saturating_add(b.total_cost),
        pax: acc.pax.saturating_add(b.total_pax),
    })
}

/// Slot usage against the ledger capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityUsage {
    pub used: usize,
    pub capacity: usize,
    pub remaining: usize,
    /// Percentage used, one decimal place, capped at 100
    pub percent: f64,
}

impl CapacityUsage {
    pub fn new(used: usize, capacity: usize) -> Self {
        let percent = if capacity == 0 {
            100.0
        } else {
            let raw = (used as f64 / capacity as f64) * 100.0;
            (raw.min(100.0) * 10.0).round() / 10.0
        };
        Self {
            used,
            capacity,
            remaining: capacity.saturating_sub(used),
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build, NewBooking, MAX_AMOUNT};
    use crate::types::{TicketCategory, TicketQuantities};

    fn sample() -> Vec<Booking> {
        vec![
            build(
                "A",
                "1",
                TicketQuantities::new().with(TicketCategory::Stag, 2),
                1000,
            )
            .unwrap(),
            build(
                "B",
                "2",
                TicketQuantities::new().with(TicketCategory::Couple, 1),
                6000,
            )
            .unwrap(),
            build(
                "C",
                "3",
                TicketQuantities::new().with(TicketCategory::Angels, 1),
                2500,
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(aggregate(&[]), Totals::default());
    }

    #[test]
    fn test_sums() {
        let totals = aggregate(&sample());
        assert_eq!(totals.paid, 1000 + 6000 + 2500);
        assert_eq!(totals.total, 13000 + 6000 + 2000);
        assert_eq!(totals.pending, 12000 - 500);
        assert_eq!(totals.pax, 2 + 2 + 2);
    }

    #[test]
    fn test_order_independent() {
        let bookings = sample();
        let mut reversed = bookings.clone();
        reversed.reverse();
        let mut rotated = bookings.clone();
        rotated.rotate_left(1);

        assert_eq!(aggregate(&bookings), aggregate(&reversed));
        assert_eq!(aggregate(&bookings), aggregate(&rotated));
    }

    #[test]
    fn test_large_amounts_saturate() {
        let big = NewBooking::new("Big", "9")
            .with_quantity(TicketCategory::Stag, 1)
            .with_amount_paid(MAX_AMOUNT)
            .build()
            .unwrap();
        let totals = aggregate(&[big.clone(), big.clone(), big]);
        assert_eq!(totals.paid, u64::MAX);
        assert_eq!(totals.pending, i64::MIN);
        assert_eq!(totals.total, 3 * 6500);
        assert_eq!(totals.pax, 3);
    }

    #[test]
    fn test_capacity_usage() {
        let usage = CapacityUsage::new(4, 250);
        assert_eq!(usage.remaining, 246);
        assert_eq!(usage.percent, 1.6);

        let full = CapacityUsage::new(250, 250);
        assert_eq!(full.remaining, 0);
        assert_eq!(full.percent, 100.0);
    }
}
