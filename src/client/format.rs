use chrono::{DateTime, Utc};

/// Timestamps are shown in UTC so every developer sees the same value.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

pub fn format_optional_timestamp(at: Option<&DateTime<Utc>>) -> String {
    at.map(format_timestamp).unwrap_or_else(|| "Never".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_in_utc_to_the_minute() {
        let at = Utc.with_ymd_and_hms(2025, 3, 9, 14, 5, 59).unwrap();

        assert_eq!(format_timestamp(&at), "2025-03-09 14:05 UTC");
    }

    #[test]
    fn missing_timestamp_reads_never() {
        assert_eq!(format_optional_timestamp(None), "Never");
    }
}
