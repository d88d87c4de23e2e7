//! Read-only views over a booking sequence.

use crate::error::{BookingError, Result};
use crate::types::Booking;

/// Bookings whose name contains `query` (case-insensitive) or whose phone
/// contains it verbatim. A blank query matches everything.
pub fn search<'a>(bookings: &'a [Booking], query: &str) -> Vec<&'a Booking> {
    let needle = query.trim();
    if needle.is_empty() {
        return bookings.iter().collect();
    }
    let lowered = needle.to_lowercase();
    bookings
        .iter()
        .filter(|b| b.name.to_lowercase().contains(&lowered) || b.phone.contains(needle))
        .collect()
}

/// The first `n` bookings (the ledger is most-recent-first).
pub fn recent(bookings: &[Booking], n: usize) -> &[Booking] {
    &bookings[..n.min(bookings.len())]
}

/// Resolve a full id or unique id prefix.
///
/// # Errors
///
/// Returns `BookingError::NotFound` when nothing matches and
/// `BookingError::InvalidInput` when a prefix matches several bookings.
pub fn resolve<'a>(bookings: &'a [Booking], id_or_prefix: &str) -> Result<&'a Booking> {
    let wanted = id_or_prefix.trim();
    if wanted.is_empty() {
        return Err(BookingError::InvalidInput("Booking ID is empty".to_string()));
    }
    if let Some(exact) = bookings.iter().find(|b| b.id.as_str() == wanted) {
        return Ok(exact);
    }
    let mut matches = bookings.iter().filter(|b| b.id.as_str().starts_with(wanted));
    match (matches.next(), matches.next()) {
        (Some(only), None) => Ok(only),
        (Some(_), Some(_)) => Err(BookingError::InvalidInput(format!(
            "Booking ID prefix {} is ambiguous",
            wanted
        ))),
        (None, _) => Err(BookingError::NotFound(format!("booking {}", wanted))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NewBooking;
    use crate::types::{BookingId, TicketCategory};

    fn booking(id: &str, name: &str, phone: &str) -> Booking {
        let mut b = NewBooking::new(name, phone)
            .with_quantity(TicketCategory::Stag, 1)
            .build()
            .unwrap();
        b.id = BookingId::from(id);
        b
    }

    fn sample() -> Vec<Booking> {
        vec![
            booking("seed-1", "Ms.Deepa", "9486610479"),
            booking("seed-2", "Ms.Akshaya", "8270580083"),
            booking("img-1", "Mr.Kamalesh", "9788724455"),
        ]
    }

    #[test]
    fn test_search_name_case_insensitive() {
        let bookings = sample();
        let hits = search(&bookings, "ms.");
        assert_eq!(hits.len(), 2);
        let hits = search(&bookings, "KAMAL");
        assert_eq!(hits[0].name, "Mr.Kamalesh");
    }

    #[test]
    fn test_search_phone_substring() {
        let bookings = sample();
        let hits = search(&bookings, "0580");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ms.Akshaya");
    }

    #[test]
    fn test_search_blank_matches_all() {
        let bookings = sample();
        assert_eq!(search(&bookings, "  ").len(), 3);
        assert!(search(&bookings, "nobody").is_empty());
    }

    #[test]
    fn test_recent_clamps() {
        let bookings = sample();
        assert_eq!(recent(&bookings, 2).len(), 2);
        assert_eq!(recent(&bookings, 5).len(), 3);
    }

    #[test]
    fn test_resolve_exact_and_prefix() {
        let bookings = sample();
        assert_eq!(resolve(&bookings, "img").unwrap().id.as_str(), "img-1");
        assert_eq!(resolve(&bookings, "seed-2").unwrap().name, "Ms.Akshaya");
        assert!(matches!(
            resolve(&bookings, "seed"),
            Err(BookingError::InvalidInput(_))
        ));
        assert!(matches!(
            resolve(&bookings, "zzz"),
            Err(BookingError::NotFound(_))
        ));
    }
}
