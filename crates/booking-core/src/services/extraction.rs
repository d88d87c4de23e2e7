//! Booking candidates extracted from a guest-sheet image.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::builder::{pending, to_millis};
use crate::error::{BookingError, Field, Result, ValidationError};
use crate::types::{Booking, BookingId, TicketQuantities};

use super::{ExtractionProvider, ImagePayload};

/// User-facing message for any extraction failure.
pub const EXTRACTION_FAILED: &str = "Failed to scan. Ensure image is clear.";

/// A booking-shaped record as returned by the extraction service.
///
/// Money fields arrive as JSON numbers that may carry a fractional part.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedBooking {
    pub name: String,
    pub phone: String,
    pub tickets: TicketQuantities,
    pub total_pax: Option<f64>,
    pub amount_paid: f64,
    pub total_cost: f64,
    pub amount_pending: Option<f64>,
}

fn to_amount(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

impl ExtractedBooking {
    /// Validate the candidate and turn it into a booking.
    ///
    /// The scanned total cost and paid amount are kept (sheets record
    /// negotiated prices); when no total is present the list price is used.
    /// Pax and the pending balance are re-derived.
    pub fn into_booking(self, created_at: DateTime<Utc>) -> std::result::Result<Booking, ValidationError> {
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

        let amount_paid = to_amount(self.amount_paid);
        let total_cost = match to_amount(self.total_cost) {
            0 => self.tickets.total_cost(),
            scanned => scanned,
        };
        let amount_pending = pending(total_cost, amount_paid)?;
        Ok(Booking {
            id: BookingId::generate(),
            name: name.to_string(),
            phone: phone.to_string(),
            tickets: self.tickets,
            total_pax: self.tickets.total_pax(),
            amount_paid,
            total_cost,
            amount_pending,
            created_at: to_millis(created_at),
        })
    }
}

/// Validated extraction output.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Candidates that passed validation, in sheet order
    pub bookings: Vec<Booking>,
    /// Zero-based sheet row and rejection reason for each dropped candidate
    pub invalid: Vec<(usize, ValidationError)>,
}

impl ExtractionReport {
    pub fn from_candidates(candidates: Vec<ExtractedBooking>, created_at: DateTime<Utc>) -> Self {
        let mut report = Self::default();
        for (row, candidate) in candidates.into_iter().enumerate() {
            match candidate.into_booking(created_at) {
                Ok(booking) => report.bookings.push(booking),
                Err(reason) => report.invalid.push((row, reason)),
            }
        }
        report
    }
}

/// Run extraction and validate every candidate.
///
/// # Errors
///
/// Any provider failure becomes `BookingError::ExternalService` carrying
/// [`EXTRACTION_FAILED`]; there is no retry.
pub async fn extract_bookings(
    provider: &dyn ExtractionProvider,
    image: &ImagePayload,
) -> Result<ExtractionReport> {
    let candidates = provider.extract(image).await.map_err(|err| {
        tracing::warn!(error = %err, "extraction service failed");
        BookingError::ExternalService(EXTRACTION_FAILED.to_string())
    })?;
    tracing::debug!(candidates = candidates.len(), "extraction returned candidates");
    Ok(ExtractionReport::from_candidates(candidates, Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ProviderError;
    use crate::types::TicketCategory;
    use async_trait::async_trait;

    struct Fixed(std::result::Result<Vec<ExtractedBooking>, ()>);

    #[async_trait]
    impl ExtractionProvider for Fixed {
        async fn extract(
            &self,
            _image: &ImagePayload,
        ) -> std::result::Result<Vec<ExtractedBooking>, ProviderError> {
            self.0
                .clone()
                .map_err(|_| ProviderError::Network("connection reset".to_string()))
        }
    }

    fn candidate(name: &str, phone: &str, tickets: TicketQuantities) -> ExtractedBooking {
        ExtractedBooking {
            name: name.to_string(),
            phone: phone.to_string(),
            tickets,
            total_pax: Some(9.0),
            amount_paid: 2000.0,
            total_cost: 4000.0,
            amount_pending: Some(0.0),
        }
    }

    #[test]
    fn test_candidate_keeps_scanned_money_and_rederives_rest() {
        let tickets = TicketQuantities::new().with(TicketCategory::Angels, 1);
        let booking = candidate("Ms.Deepa", "9486610479", tickets)
            .into_booking(Utc::now())
            .unwrap();

        assert_eq!(booking.total_cost, 4000);
        assert_eq!(booking.amount_paid, 2000);
        assert_eq!(booking.amount_pending, 2000);
        assert_eq!(booking.total_pax, 2);
    }

    #[test]
    fn test_missing_total_uses_list_price() {
        let tickets = TicketQuantities::new().with(TicketCategory::Stag, 2);
        let mut c = candidate("A", "1", tickets);
        c.total_cost = 0.0;
        c.amount_paid = 999.6;
        let booking = c.into_booking(Utc::now()).unwrap();
        assert_eq!(booking.total_cost, 13000);
        assert_eq!(booking.amount_paid, 1000);
        assert_eq!(booking.amount_pending, 12000);
    }

    #[test]
    fn test_oversized_scanned_amounts_are_rejected() {
        let tickets = TicketQuantities::new().with(TicketCategory::Stag, 1);
        let mut c = candidate("A", "1", tickets);
        c.amount_paid = 1e30;
        assert!(matches!(
            c.into_booking(Utc::now()),
            Err(ValidationError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_candidate_timestamp_is_whole_millis() {
        let at = DateTime::from_timestamp(1_700_000_000, 987_654_321).unwrap();
        let tickets = TicketQuantities::new().with(TicketCategory::Stag, 1);
        let booking = candidate("A", "1", tickets).into_booking(at).unwrap();
        assert_eq!(booking.created_at.timestamp_subsec_nanos(), 987_000_000);
    }

    #[test]
    fn test_candidate_validation() {
        let tickets = TicketQuantities::new().with(TicketCategory::Stag, 1);
        assert_eq!(
            candidate(" ", "1", tickets).into_booking(Utc::now()),
            Err(ValidationError::MissingField(Field::Name))
        );
        assert_eq!(
            candidate("A", "1", TicketQuantities::new()).into_booking(Utc::now()),
            Err(ValidationError::NoTicketsSelected)
        );
    }

    #[test]
    fn test_parses_service_json() {
        let parsed: Vec<ExtractedBooking> = serde_json::from_str(
            r#"[{"name":"Mr.Kamalesh","phone":"9788724455","tickets":{"Couple":1,"Stag":2},
                "totalPax":4,"amountPaid":9500,"totalCost":19000.0,"amountPending":9500}]"#,
        )
        .unwrap();
        assert_eq!(parsed[0].tickets.stag, 2);
        assert_eq!(parsed[0].total_cost, 19000.0);
    }

    #[tokio::test]
    async fn test_extract_splits_valid_and_invalid() {
        let stag = TicketQuantities::new().with(TicketCategory::Stag, 1);
        let provider = Fixed(Ok(vec![
            candidate("A", "1", stag),
            candidate("", "2", stag),
            candidate("C", "3", stag),
        ]));
        let image = ImagePayload::new("image/png", vec![0]);

        let report = extract_bookings(&provider, &image).await.unwrap();
        let names: Vec<_> = report.bookings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(
            report.invalid,
            vec![(1, ValidationError::MissingField(Field::Name))]
        );
    }

    #[tokio::test]
    async fn test_provider_failure_is_reported() {
        let provider = Fixed(Err(()));
        let image = ImagePayload::new("image/png", vec![0]);

        let err = extract_bookings(&provider, &image).await.unwrap_err();
        assert!(matches!(err, BookingError::ExternalService(ref m) if m == EXTRACTION_FAILED));
    }
}
