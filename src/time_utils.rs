// SPDX-License-Identifier: MIT

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
///
/// All stored timestamps use this form so lexicographic order matches
/// chronological order.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// The current time in the storage format.
pub fn now_rfc3339() -> String {
    format_utc_rfc3339(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uses_z_suffix() {
        let date = DateTime::parse_from_rfc3339("2026-08-05T12:30:00+00:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_utc_rfc3339(date), "2026-08-05T12:30:00Z");
    }
}
