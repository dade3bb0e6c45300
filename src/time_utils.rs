// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-date parsing and formatting.

use chrono::{DateTime, Local, NaiveDate};

/// The human-readable form exercise dates are stored and served in,
/// e.g. `"Sun Jan 15 2023"`.
const DATE_STRING_FORMAT: &str = "%a %b %d %Y";

/// Render a calendar date in the stored/served form.
pub fn render_date(date: NaiveDate) -> String {
    date.format(DATE_STRING_FORMAT).to_string()
}

/// Parse a caller-supplied or stored date string.
///
/// Accepts ISO dates (`2023-01-15`), the rendered form (`Sun Jan 15 2023`,
/// so stored dates survive re-parsing during log filtering), and RFC3339
/// timestamps (date part only). Anything else is an invalid date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, DATE_STRING_FORMAT))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Today's calendar date in server-local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_date() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert_eq!(render_date(date), "Sun Jan 15 2023");

        // Single-digit days are zero padded
        let date = NaiveDate::from_ymd_opt(2023, 7, 5).unwrap();
        assert_eq!(render_date(date), "Wed Jul 05 2023");
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_date("2023-01-15"),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
    }

    #[test]
    fn test_parse_rendered_date_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(parse_date(&render_date(date)), Some(date));
    }

    #[test]
    fn test_parse_rfc3339_takes_date_part() {
        assert_eq!(
            parse_date("2023-01-15T10:30:00Z"),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2023-13-40"), None);
    }
}
