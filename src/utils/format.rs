use chrono::{DateTime, NaiveDate, Utc};

/// Format an API timestamp (RFC 3339 or bare date) for display.
/// Falls back to the raw string when the backend sends something unparseable.
pub fn format_date(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.with_timezone(&Utc).format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(format_date("2024-03-05T10:30:00Z"), "Mar 5, 2024");
    }

    #[test]
    fn formats_bare_dates() {
        assert_eq!(format_date("2023-11-21"), "Nov 21, 2023");
    }

    #[test]
    fn passes_through_unparseable_values() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
