use time::{Date, Month, OffsetDateTime, UtcOffset};

/// Today in the user's local timezone, falling back to UTC when the local
/// offset cannot be determined.
pub fn today_local() -> Date {
    let now = OffsetDateTime::now_utc();
    if let Ok(offset) = UtcOffset::current_local_offset() {
        now.to_offset(offset).date()
    } else {
        now.date()
    }
}

/// `YYYY-MM-DD`, the shape used by the manual-entry date field.
pub fn format_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// Parse a `YYYY-MM-DD` string as typed into the manual-entry form.
pub fn parse_date_str(raw: &str) -> Option<Date> {
    let mut parts = raw.trim().splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Short display date for entry lists: "Mar 1, 2024".
pub fn format_display_date(date: Date) -> String {
    let month = match date.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };
    format!("{} {}, {}", month, date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn iso_roundtrip() {
        let d = date!(2024 - 03 - 01);
        assert_eq!(format_iso_date(d), "2024-03-01");
        assert_eq!(parse_date_str("2024-03-01"), Some(d));
        assert_eq!(parse_date_str("2024-3-1"), Some(d));
        assert_eq!(parse_date_str("not a date"), None);
        assert_eq!(parse_date_str("2024-13-01"), None);
    }

    #[test]
    fn display_date_is_short_form() {
        assert_eq!(format_display_date(date!(2023 - 12 - 15)), "Dec 15, 2023");
    }
}
