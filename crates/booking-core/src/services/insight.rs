//! Sales commentary from the insight service.

use serde::Serialize;

use crate::types::Booking;

use super::InsightProvider;

/// Returned without calling the service when there is nothing to analyse.
pub const EMPTY_LEDGER_MESSAGE: &str = "Add some bookings to generate AI insights.";

/// Returned whenever the service fails.
pub const INSIGHT_FALLBACK: &str =
    "Unable to generate insights at the moment. Please check your data or connection.";

/// Per-booking figures sent to the service. Names and phones stay local.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    #[serde(rename = "type")]
    pub category: String,
    pub paid: u64,
    pub pending: i64,
    pub total: u64,
}

pub fn summarize(bookings: &[Booking]) -> Vec<BookingSummary> {
    bookings
        .iter()
        .map(|b| BookingSummary {
            category: b.tickets.summary(),
            paid: b.amount_paid,
            pending: b.amount_pending,
            total: b.total_cost,
        })
        .collect()
}

pub fn build_prompt(summary: &[BookingSummary]) -> serde_json::Result<String> {
    let data = serde_json::to_string(summary)?;
    Ok(format!(
        "I have a list of event ticket bookings.\n\
         Here is a summarized version of the data:\n\
         {}\n\n\
         As a business analyst, provide a very brief (max 3 sentences) analysis of:\n\
         1. Which ticket type is most popular?\n\
         2. What is the overall payment health (ratio of paid to pending)?\n\
         3. One strategic suggestion to improve sales or collection.\n\n\
         Keep it professional and encouraging.",
        data
    ))
}

/// Ask the provider for commentary on the ledger.
///
/// Never fails: an empty ledger yields [`EMPTY_LEDGER_MESSAGE`] and any
/// provider error or blank answer yields [`INSIGHT_FALLBACK`].
pub async fn insights(provider: &dyn InsightProvider, bookings: &[Booking]) -> String {
    if bookings.is_empty() {
        return EMPTY_LEDGER_MESSAGE.to_string();
    }
    let prompt = match build_prompt(&summarize(bookings)) {
        Ok(prompt) => prompt,
        Err(err) => {
            tracing::warn!(error = %err, "failed to encode insight summary");
            return INSIGHT_FALLBACK.to_string();
        }
    };
    match provider.generate(&prompt).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            tracing::warn!("insight service returned an empty answer");
            INSIGHT_FALLBACK.to_string()
        }
        Err(err) => {
            tracing::warn!(error = %err, "insight service failed");
            INSIGHT_FALLBACK.to_string()
        }
    }
}
