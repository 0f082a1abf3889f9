use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Parse an IANA timezone name, falling back to UTC.
pub fn parse_timezone(tz_str: &str) -> Tz {
    tz_str.parse().unwrap_or_else(|_| {
        log::warn!("unknown timezone {:?}, using UTC", tz_str);
        chrono_tz::UTC
    })
}

/// Get "today" in the given timezone (for the date picker's today marker)
pub fn today_in_tz(tz_str: &str) -> NaiveDate {
    let tz = parse_timezone(tz_str);
    Utc::now().with_timezone(&tz).date_naive()
}

/// Whole years between `date_of_birth` and `today`.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(date_of_birth)
}
