/// `HH:MM:SS` for the live timer display.
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Compact duration for entry lists: "45m", "2h", "1h 30m".
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours == 0 {
        format!("{}m", minutes)
    } else if minutes == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}

/// `$1,234.56` — dollar sign, thousands grouping, two decimals.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hms_pads_every_field() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(90), "00:01:30");
        assert_eq!(format_hms(3661), "01:01:01");
    }

    #[test]
    fn compact_duration_drops_zero_parts() {
        assert_eq!(format_duration(45 * 60), "45m");
        assert_eq!(format_duration(2 * 3600), "2h");
        assert_eq!(format_duration(5400), "1h 30m");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1.875), "$1.88");
        assert_eq!(format_currency(12450.75), "$12,450.75");
        assert_eq!(format_currency(1234567.5), "$1,234,567.50");
        assert_eq!(format_currency(-42.0), "-$42.00");
    }
}
