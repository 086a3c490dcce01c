//! Timestamp formatting for response payloads.

/// Formats a database timestamp as `YYYY-MM-DD HH:MM:SS` for responses.
pub fn format_datetime(value: jiff_diesel::DateTime) -> String {
    let datetime: jiff::civil::DateTime = value.into();
    datetime.strftime("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_civil_datetime() {
        let datetime: jiff::civil::DateTime = "2024-06-01 09:30:15".parse().unwrap();
        let formatted = format_datetime(jiff_diesel::DateTime::from(datetime));
        assert_eq!(formatted, "2024-06-01 09:30:15");
    }
}
