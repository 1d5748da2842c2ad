use serde::{Deserialize, Serialize};

/// Revenue or expense amount attributed to a named bucket (category or
/// client). Kept as an ordered list so reports render in fixture order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountByLabel {
    pub label: String,
    pub amount: f64,
}

impl AmountByLabel {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBreakdown {
    pub total: f64,
    pub by_category: Vec<AmountByLabel>,
    pub by_client: Vec<AmountByLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBreakdown {
    pub total: f64,
    pub by_category: Vec<AmountByLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFigure {
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
}

/// One reporting period (a quarter or a full year) of financial data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    pub year: i32,
    /// 1–4 for quarterly periods, `None` for annual ones.
    pub quarter: Option<u8>,
    pub revenue: RevenueBreakdown,
    pub expenses: ExpenseBreakdown,
    pub profit: f64,
    pub profit_margin: f64,
    pub monthly_breakdown: Vec<MonthlyFigure>,
}
