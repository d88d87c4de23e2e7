//! String formatting utilities for UI rendering.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// First 8 characters of a booking id.
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Format a datetime for display in the configured timezone.
///
/// Plain output stays RFC 3339 in UTC so scripts can parse it.
pub fn format_datetime(dt: &DateTime<Utc>, timezone: Option<Tz>, pretty: bool) -> String {
    if !pretty {
        return dt.to_rfc3339();
    }
    match timezone {
        Some(tz) => dt.with_timezone(&tz).format("%Y-%m-%d %H:%M %Z").to_string(),
        None => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
    }
}

/// Group digits in thousands: 36700 -> "36,700", -500 -> "-500".
///
/// Accepts both paid (`u64`) and pending (`i64`) amounts without casting.
pub fn format_amount(amount: impl Into<i128>) -> String {
    let amount = amount.into();
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
