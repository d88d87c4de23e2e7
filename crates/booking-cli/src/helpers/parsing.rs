//! Parsing helpers for datetime, timezone and export format.

use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::CliError;

/// Parse a datetime string (ISO-8601 or YYYY-MM-DD).
pub fn parse_datetime(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| CliError::invalid_input(format!("Invalid date value: {}", value)))?;
        return Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }

    Err(CliError::invalid_input(format!(
        "Invalid date/time (expected ISO-8601 or YYYY-MM-DD): {}",
        value
    ))
    .into())
}

/// Validate an IANA timezone name. Empty or "auto" means UTC display.
pub fn parse_timezone(value: &str) -> anyhow::Result<Option<String>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }

    let tz = trimmed.parse::<chrono_tz::Tz>().map_err(|_| {
        CliError::invalid_input_with_hint(
            format!("Invalid timezone: {}", trimmed),
            "Hint: Use an IANA name such as Asia/Kolkata or Europe/London.",
        )
    })?;
    Ok(Some(tz.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

pub fn parse_export_format(value: &str) -> anyhow::Result<ExportFormat> {
    match value.to_ascii_lowercase().as_str() {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        other => Err(CliError::invalid_input(format!(
            "Unsupported export format: {} (use csv or json)",
            other
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime_formats() {
        let full = parse_datetime("2024-03-01T18:30:00+05:30").unwrap();
        assert_eq!(full.to_rfc3339(), "2024-03-01T13:00:00+00:00");

        let day = parse_datetime("2024-03-01").unwrap();
        assert_eq!(day.to_rfc3339(), "2024-03-01T00:00:00+00:00");

        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(
            parse_timezone("Asia/Kolkata").unwrap().as_deref(),
            Some("Asia/Kolkata")
        );
        assert_eq!(parse_timezone("auto").unwrap(), None);
        assert!(parse_timezone("Mars/Olympus").is_err());
    }

    #[test]
    fn test_parse_export_format() {
        assert_eq!(parse_export_format("CSV").unwrap(), ExportFormat::Csv);
        assert_eq!(parse_export_format("json").unwrap(), ExportFormat::Json);
        assert!(parse_export_format("xlsx").is_err());
    }
}
