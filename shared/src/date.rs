//! Timestamp rendering
//!
//! The auth service sends `created_at` as RFC 3339. The profile view shows it
//! in the viewer's local time zone, `M/D/YYYY, h:mm:ss AM` style.

use chrono::{DateTime, FixedOffset, Local, TimeZone};

/// Shown when `created_at` cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const LOCAL_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Parse an RFC 3339 timestamp.
pub fn parse(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok()
}

/// Render a timestamp in the given time zone.
///
/// # Arguments
/// * `raw` - RFC 3339 string as sent by the auth service
/// * `tz` - zone to render in
///
/// # Returns
/// `M/D/YYYY, h:mm:ss AM` text, or [`INVALID_DATE`] when `raw` does not parse.
pub fn render_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse(raw) {
        Some(ts) => ts.with_timezone(tz).format(LOCAL_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Render a timestamp in the local time zone of the host.
pub fn render_local(raw: &str) -> String {
    render_in(raw, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn renders_rfc3339_in_target_zone() {
        assert_eq!(
            render_in("2024-03-01T22:05:09Z", &Utc),
            "3/1/2024, 10:05:09 PM"
        );

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            render_in("2024-03-01T22:05:09Z", &plus_two),
            "3/2/2024, 12:05:09 AM"
        );
    }

    #[test]
    fn keeps_fractional_and_offset_inputs() {
        assert_eq!(
            render_in("2023-12-31T23:59:59.123456+01:00", &Utc),
            "12/31/2023, 10:59:59 PM"
        );
    }

    #[test]
    fn garbage_renders_invalid_date() {
        assert_eq!(render_in("yesterday", &Utc), INVALID_DATE);
        assert_eq!(render_local(""), INVALID_DATE);
    }
}
