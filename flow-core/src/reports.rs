use crate::domain::ReportPeriod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    #[default]
    Quarterly,
    Annual,
}

pub fn find_quarter(periods: &[ReportPeriod], year: i32, quarter: u8) -> Option<&ReportPeriod> {
    periods
        .iter()
        .find(|p| p.year == year && p.quarter == Some(quarter))
}

pub fn find_annual(periods: &[ReportPeriod], year: i32) -> Option<&ReportPeriod> {
    periods.iter().find(|p| p.year == year && p.quarter.is_none())
}

/// The period immediately before `(year, quarter)`, wrapping Q1 to the
/// previous year's Q4.
pub fn previous_quarter(year: i32, quarter: u8) -> (i32, u8) {
    if quarter == 1 {
        (year - 1, 4)
    } else {
        (year, quarter - 1)
    }
}

/// Percentage change from `previous` to `current`. A zero previous value
/// reports as a flat 100% change rather than a division by zero.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 100.0;
    }
    (current - previous) / previous * 100.0
}

/// Profit as a percentage of revenue; zero revenue reports a zero margin.
pub fn profit_margin(profit: f64, revenue: f64) -> f64 {
    if revenue == 0.0 {
        return 0.0;
    }
    profit / revenue * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExpenseBreakdown, RevenueBreakdown};

    fn period(year: i32, quarter: Option<u8>, revenue: f64, expenses: f64) -> ReportPeriod {
        ReportPeriod {
            year,
            quarter,
            revenue: RevenueBreakdown {
                total: revenue,
                by_category: Vec::new(),
                by_client: Vec::new(),
            },
            expenses: ExpenseBreakdown {
                total: expenses,
                by_category: Vec::new(),
            },
            profit: revenue - expenses,
            profit_margin: profit_margin(revenue - expenses, revenue),
            monthly_breakdown: Vec::new(),
        }
    }

    #[test]
    fn lookup_distinguishes_quarterly_from_annual() {
        let periods = vec![
            period(2023, Some(4), 12450.75, 4325.80),
            period(2023, None, 43250.75, 16325.80),
        ];
        assert!(find_quarter(&periods, 2023, 4).is_some());
        assert!(find_quarter(&periods, 2023, 3).is_none());
        assert_eq!(find_annual(&periods, 2023).unwrap().revenue.total, 43250.75);
        assert!(find_annual(&periods, 2022).is_none());
    }

    #[test]
    fn previous_quarter_wraps_across_years() {
        assert_eq!(previous_quarter(2023, 4), (2023, 3));
        assert_eq!(previous_quarter(2023, 1), (2022, 4));
    }

    #[test]
    fn percent_change_conventions() {
        assert!((percent_change(110.0, 100.0) - 10.0).abs() < 1e-9);
        assert!((percent_change(90.0, 100.0) + 10.0).abs() < 1e-9);
        // No previous period: reported as a flat +100%.
        assert_eq!(percent_change(500.0, 0.0), 100.0);
    }

    #[test]
    fn margin_handles_zero_revenue() {
        assert!((profit_margin(8124.95, 12450.75) - 65.257).abs() < 0.01);
        assert_eq!(profit_margin(10.0, 0.0), 0.0);
    }
}
