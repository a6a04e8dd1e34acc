use chrono::NaiveDate;

/// Format a date for display, DD.MM.YYYY.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Parse a `<input type="date">` value (YYYY-MM-DD). Empty input means
/// the field was cleared.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(format_date(d), "30.08.2026");
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(
            parse_date_input("2026-08-30"),
            NaiveDate::from_ymd_opt(2026, 8, 30)
        );
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("junk"), None);
    }
}
