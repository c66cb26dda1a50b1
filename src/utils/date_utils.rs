use chrono::{NaiveDate, NaiveDateTime};

/// Date format used in CSV files and API payloads.
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

const WIRE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a calendar date as the forecast service emits it.
///
/// The service serializes pandas timestamps, so a forecast row usually
/// carries a full datetime (`2015-08-01T00:00:00`) even though only the
/// date part is meaningful. Bare dates (`2015-08-01`) are accepted too.
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(raw, WIRE_DATETIME_FORMAT)
        .map(|dt| dt.date())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, WIRE_DATE_FORMAT).ok())
}

/// Human-readable axis/tooltip label, e.g. `Aug 1, 2015`.
pub fn chart_date_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_datetime_form() {
        let date = parse_wire_date("2015-08-01T00:00:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2015, 8, 1).unwrap());
    }

    #[test]
    fn parses_bare_date_form() {
        let date = parse_wire_date("2013-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2013, 1, 1).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_wire_date("not-a-date").is_none());
        assert!(parse_wire_date("").is_none());
    }

    #[test]
    fn label_is_short_month_day_year() {
        let date = NaiveDate::from_ymd_opt(2015, 8, 1).unwrap();
        assert_eq!(chart_date_label(date), "Aug 1, 2015");
        let date = NaiveDate::from_ymd_opt(2015, 12, 25).unwrap();
        assert_eq!(chart_date_label(date), "Dec 25, 2015");
    }
}
