use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod error;
pub mod format;
pub mod navigation;
pub mod notify;
pub mod reports;
pub mod store;
pub mod transaction_form;
pub mod view;

pub use config::AppConfig;
pub use error::{ApiError, ReportError};
pub use format::{format_currency, format_date, parse_timestamp, CurrencyFormat};
pub use navigation::{NavState, Section};
pub use notify::{Notification, NotificationKind, Operation};
pub use reports::{
    request_reports, CashFlowView, ProfitLossView, ReportOutcome, ReportRange, Tone,
};
pub use store::{DataStore, Slice, SliceUpdate};
pub use transaction_form::{DraftField, FieldVisibility, ModalState, TransactionDraft};

/// Kind of money movement. Unknown strings from the backend are kept verbatim
/// so the renderer can fall back to showing them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
    Other(String),
}

impl TransactionType {
    /// The wire value, as sent to and received from the backend
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Transfer => "transfer",
            TransactionType::Other(raw) => raw,
        }
    }

    /// The three types offered by the transaction forms, in select order
    pub fn selectable() -> [TransactionType; 3] {
        [
            TransactionType::Income,
            TransactionType::Expense,
            TransactionType::Transfer,
        ]
    }
}

impl Default for TransactionType {
    fn default() -> Self {
        TransactionType::Income
    }
}

impl From<String> for TransactionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "income" => TransactionType::Income,
            "expense" => TransactionType::Expense,
            "transfer" => TransactionType::Transfer,
            _ => TransactionType::Other(raw),
        }
    }
}

impl From<&str> for TransactionType {
    fn from(raw: &str) -> Self {
        TransactionType::from(raw.to_string())
    }
}

impl From<TransactionType> for String {
    fn from(kind: TransactionType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A balance-holding entity (bank account, card, cash desk...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    /// Backend account kind, e.g. "bank_account" or "cash"
    pub account_type: String,
    #[serde(deserialize_with = "lenient::amount")]
    pub current_balance: f64,
    #[serde(default, deserialize_with = "lenient::optional_amount")]
    pub initial_balance: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Income or expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// Tag for the business activity a transaction belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessDirection {
    pub id: i64,
    pub name: String,
}

/// A posted ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub transaction_type: TransactionType,
    #[serde(deserialize_with = "lenient::amount")]
    pub amount: f64,
    /// ISO 8601 date-time as produced by the backend
    pub transaction_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub from_account: Option<Account>,
    #[serde(default)]
    pub to_account: Option<Account>,
    #[serde(default)]
    pub income_category: Option<Category>,
    #[serde(default)]
    pub expense_category: Option<Category>,
    #[serde(default)]
    pub business_direction: Option<BusinessDirection>,
}

/// A scheduled transaction that has not been posted yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedTransaction {
    pub id: i64,
    pub transaction_type: TransactionType,
    #[serde(deserialize_with = "lenient::amount")]
    pub amount: f64,
    /// ISO 8601 date-time the transaction is due
    pub planned_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence_pattern: Option<String>,
}

/// Body of `POST /transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub transaction_type: TransactionType,
    /// NaN when the amount field could not be parsed; serializes as `null`
    pub amount: f64,
    pub transaction_date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_direction_id: Option<i64>,
}

/// Body of `POST /planned-transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlannedTransactionRequest {
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub planned_date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_direction_id: Option<i64>,
    #[serde(default)]
    pub is_recurring: bool,
    /// One of [`RECURRENCE_PATTERNS`]; only sent for recurring entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_pattern: Option<String>,
}

/// Repeat intervals the backend stores for recurring planned transactions
pub const RECURRENCE_PATTERNS: [(&str, &str); 4] = [
    ("daily", "Daily"),
    ("weekly", "Weekly"),
    ("monthly", "Monthly"),
    ("yearly", "Yearly"),
];

/// Body of `POST /accounts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
    pub account_type: String,
    pub initial_balance: f64,
}

/// Body of `PUT /accounts/{id}`; the balance is not editable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
    pub account_type: String,
}

/// Account kinds the backend accepts, paired with their display names
pub const ACCOUNT_TYPES: [(&str, &str); 5] = [
    ("bank_account", "Bank account"),
    ("card", "Card"),
    ("cash", "Cash"),
    ("robokassa", "Robokassa"),
    ("other", "Other"),
];

/// Body of the category and business direction create endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateNamedRequest {
    pub name: String,
}

/// Plain `{message}` acknowledgement returned by seeding and deactivation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Reporting window echoed back by the report endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Response of `GET /reports/cash-flow`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowReport {
    #[serde(deserialize_with = "lenient::amount")]
    pub total_income: f64,
    #[serde(deserialize_with = "lenient::amount")]
    pub total_expense: f64,
    #[serde(deserialize_with = "lenient::amount")]
    pub net_flow: f64,
    #[serde(default)]
    pub period: Option<ReportPeriod>,
}

/// One line of a profit-loss breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    #[serde(deserialize_with = "lenient::amount")]
    pub amount: f64,
}

/// Response of `GET /reports/profit-loss`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossReport {
    #[serde(default)]
    pub income_by_category: Vec<CategoryTotal>,
    #[serde(default)]
    pub expense_by_category: Vec<CategoryTotal>,
    #[serde(default)]
    pub period: Option<ReportPeriod>,
}

/// Amount decoding that accepts both JSON numbers and numeric strings.
/// Strings that do not parse become NaN, mirroring how the amounts are summed.
mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    impl NumberOrText {
        fn into_f64(self) -> f64 {
            match self {
                NumberOrText::Number(value) => value,
                NumberOrText::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
            }
        }
    }

    pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        NumberOrText::deserialize(deserializer).map(NumberOrText::into_f64)
    }

    pub fn optional_amount<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Ok(Option::<NumberOrText>::deserialize(deserializer)?.map(NumberOrText::into_f64))
    }
}
