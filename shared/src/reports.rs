use crate::format::format_currency;
use crate::notify::{Notification, Operation};
use crate::{ApiError, CashFlowReport, CategoryTotal, ProfitLossReport, ReportError};

/// A validated reporting period, both ends as `YYYY-MM-DD` from the date inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRange {
    pub start_date: String,
    pub end_date: String,
}

impl ReportRange {
    /// Both dates are required; nothing else is checked before the request
    pub fn new(start_date: &str, end_date: &str) -> Result<Self, ReportError> {
        let (start_date, end_date) = (start_date.trim(), end_date.trim());
        if start_date.is_empty() || end_date.is_empty() {
            return Err(ReportError::MissingDates);
        }
        Ok(Self {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        })
    }

    pub fn query(&self) -> String {
        format!("start_date={}&end_date={}", self.start_date, self.end_date)
    }
}

/// Hands a complete period to `send`. With a date missing, `send` is never
/// called and the notification to show comes back instead.
pub fn request_reports<F>(start_date: &str, end_date: &str, send: F) -> Result<(), Notification>
where
    F: FnOnce(ReportRange),
{
    let range = ReportRange::new(start_date, end_date).map_err(Notification::from)?;
    send(range);
    Ok(())
}

/// Sign-dependent colouring for a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    pub fn of(value: f64) -> Tone {
        if value >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Tone::Positive => "text-positive",
            Tone::Negative => "text-negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowView {
    pub total_income: String,
    pub total_expense: String,
    pub net_flow: String,
    pub net_tone: Tone,
}

impl From<&CashFlowReport> for CashFlowView {
    fn from(report: &CashFlowReport) -> Self {
        Self {
            total_income: format_currency(report.total_income),
            total_expense: format_currency(report.total_expense),
            net_flow: format_currency(report.net_flow),
            net_tone: Tone::of(report.net_flow),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLine {
    pub category: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub title: &'static str,
    pub tone: Tone,
    pub lines: Vec<CategoryLine>,
}

/// Profit-loss breakdown; a group with no lines is left out entirely
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitLossView {
    pub income: Option<CategoryGroup>,
    pub expense: Option<CategoryGroup>,
}

impl ProfitLossView {
    pub fn is_empty(&self) -> bool {
        self.income.is_none() && self.expense.is_none()
    }
}

fn group(title: &'static str, tone: Tone, totals: &[CategoryTotal]) -> Option<CategoryGroup> {
    if totals.is_empty() {
        return None;
    }
    Some(CategoryGroup {
        title,
        tone,
        lines: totals
            .iter()
            .map(|total| CategoryLine {
                category: total.category.clone(),
                amount: format_currency(total.amount),
            })
            .collect(),
    })
}

impl From<&ProfitLossReport> for ProfitLossView {
    fn from(report: &ProfitLossReport) -> Self {
        Self {
            income: group("Income by category", Tone::Positive, &report.income_by_category),
            expense: group("Expense by category", Tone::Negative, &report.expense_by_category),
        }
    }
}

/// Both report requests, settled. Each panel that succeeded is filled in;
/// any failure yields a single combined notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub cash_flow: Option<CashFlowView>,
    pub profit_loss: Option<ProfitLossView>,
    pub failure: Option<Notification>,
}

impl ReportOutcome {
    pub fn combine(
        cash_flow: Result<CashFlowReport, ApiError>,
        profit_loss: Result<ProfitLossReport, ApiError>,
    ) -> Self {
        let failed = cash_flow.is_err() || profit_loss.is_err();
        if let Err(e) = &cash_flow {
            log::error!("Cash flow report failed: {}", e);
        }
        if let Err(e) = &profit_loss {
            log::error!("Profit-loss report failed: {}", e);
        }
        Self {
            cash_flow: cash_flow.ok().as_ref().map(CashFlowView::from),
            profit_loss: profit_loss.ok().as_ref().map(ProfitLossView::from),
            failure: failed.then(|| Notification::failure(Operation::GenerateReports)),
        }
    }
}
