//! Pure projections from store data to what the UI shows.
//!
//! Nothing here touches the DOM. Components take these view models and
//! render them as-is, which keeps every labelling and aggregation rule
//! testable without a browser.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::format::{format_currency, format_date, parse_timestamp};
use crate::{
    Account, BusinessDirection, Category, DataStore, PlannedTransaction, Transaction,
    TransactionType, RECURRENCE_PATTERNS,
};

pub const UNCATEGORIZED: &str = "Uncategorized";

/// One `<option>` of a select; the placeholder has an empty value
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

pub fn account_options(accounts: &[Account]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder("Select account"))
        .chain(accounts.iter().map(|account| SelectOption {
            value: account.id.to_string(),
            label: format!("{} ({})", account.name, format_currency(account.current_balance)),
        }))
        .collect()
}

pub fn category_options(categories: &[Category]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder("Select category"))
        .chain(categories.iter().map(|category| SelectOption {
            value: category.id.to_string(),
            label: category.name.clone(),
        }))
        .collect()
}

pub fn direction_options(directions: &[BusinessDirection]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder("Select direction"))
        .chain(directions.iter().map(|direction| SelectOption {
            value: direction.id.to_string(),
            label: direction.name.clone(),
        }))
        .collect()
}

/// Settings-page line for an account
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRow {
    pub id: i64,
    pub name: String,
    pub account_type: String,
    pub balance: String,
}

pub fn account_rows(accounts: &[Account]) -> Vec<AccountRow> {
    accounts
        .iter()
        .map(|account| AccountRow {
            id: account.id,
            name: account.name.clone(),
            account_type: account.account_type.clone(),
            balance: format_currency(account.current_balance),
        })
        .collect()
}

/// Settings-page line for anything that is just a name
#[derive(Debug, Clone, PartialEq)]
pub struct NameRow {
    pub id: i64,
    pub name: String,
}

pub fn category_rows(categories: &[Category]) -> Vec<NameRow> {
    categories
        .iter()
        .map(|category| NameRow {
            id: category.id,
            name: category.name.clone(),
        })
        .collect()
}

pub fn direction_rows(directions: &[BusinessDirection]) -> Vec<NameRow> {
    directions
        .iter()
        .map(|direction| NameRow {
            id: direction.id,
            name: direction.name.clone(),
        })
        .collect()
}

pub fn row_class(kind: &TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => "income-row",
        TransactionType::Expense => "expense-row",
        TransactionType::Transfer => "transfer-row",
        TransactionType::Other(_) => "",
    }
}

/// Display name of a type; unknown types are shown verbatim
pub fn type_label(kind: &TransactionType) -> &str {
    match kind {
        TransactionType::Income => "Income",
        TransactionType::Expense => "Expense",
        TransactionType::Transfer => "Transfer",
        TransactionType::Other(raw) => raw,
    }
}

pub fn category_label(transaction: &Transaction) -> &str {
    transaction
        .income_category
        .as_ref()
        .or(transaction.expense_category.as_ref())
        .map(|category| category.name.as_str())
        .unwrap_or(UNCATEGORIZED)
}

/// `From: X | To: Y`, with absent sides left out
pub fn account_label(transaction: &Transaction) -> String {
    let from = transaction
        .from_account
        .as_ref()
        .map(|account| format!("From: {}", account.name));
    let to = transaction
        .to_account
        .as_ref()
        .map(|account| format!("To: {}", account.name));

    from.into_iter().chain(to).collect::<Vec<_>>().join(" | ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: i64,
    pub row_class: &'static str,
    pub type_label: String,
    pub amount: String,
    pub category: String,
    pub accounts: String,
    pub description: Option<String>,
    pub date: String,
}

pub fn transaction_row(transaction: &Transaction) -> TransactionRow {
    TransactionRow {
        id: transaction.id,
        row_class: row_class(&transaction.transaction_type),
        type_label: type_label(&transaction.transaction_type).to_string(),
        amount: format_currency(transaction.amount),
        category: category_label(transaction).to_string(),
        accounts: account_label(transaction),
        description: transaction
            .description
            .clone()
            .filter(|description| !description.is_empty()),
        date: format_date(&transaction.transaction_date),
    }
}

pub fn transaction_rows(transactions: &[Transaction]) -> Vec<TransactionRow> {
    transactions.iter().map(transaction_row).collect()
}

/// The first `limit` transactions, in the order the backend sent them
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> &[Transaction] {
    &transactions[..transactions.len().min(limit)]
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRow {
    pub id: i64,
    pub row_class: &'static str,
    pub type_label: String,
    pub amount: String,
    pub scheduled_for: String,
    pub description: Option<String>,
    pub overdue: bool,
    /// `None` for one-off entries
    pub recurrence: Option<String>,
}

/// "Repeats monthly" for recurring entries. Unknown patterns are shown as sent.
pub fn recurrence_label(planned: &PlannedTransaction) -> Option<String> {
    if !planned.is_recurring {
        return None;
    }
    let label = match planned.recurrence_pattern.as_deref() {
        None | Some("") => return Some("Recurring".to_string()),
        Some(pattern) => RECURRENCE_PATTERNS
            .iter()
            .find(|(value, _)| *value == pattern)
            .map(|(_, label)| label.to_lowercase())
            .unwrap_or_else(|| pattern.to_string()),
    };
    Some(format!("Repeats {}", label))
}

/// Due strictly before `now`. Dates that cannot be parsed are never overdue.
pub fn is_overdue(planned: &PlannedTransaction, now: NaiveDateTime) -> bool {
    parse_timestamp(&planned.planned_date)
        .map(|due| due < now)
        .unwrap_or(false)
}

pub fn planned_rows(planned: &[PlannedTransaction], now: NaiveDateTime) -> Vec<PlannedRow> {
    planned
        .iter()
        .map(|item| {
            let overdue = is_overdue(item, now);
            PlannedRow {
                id: item.id,
                row_class: if overdue { "planned-row overdue" } else { "planned-row" },
                type_label: type_label(&item.transaction_type).to_string(),
                amount: format_currency(item.amount),
                scheduled_for: format!("Scheduled for: {}", format_date(&item.planned_date)),
                description: item
                    .description
                    .clone()
                    .filter(|description| !description.is_empty()),
                overdue,
                recurrence: recurrence_label(item),
            }
        })
        .collect()
}

/// Local midnight on the first day of `now`'s month
pub fn start_of_month(now: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
        .and_then(|first| first.and_hms_opt(0, 0, 0))
        .unwrap_or(now)
}

pub fn in_current_month(transaction: &Transaction, now: NaiveDateTime) -> bool {
    let start = start_of_month(now);
    parse_timestamp(&transaction.transaction_date)
        .map(|date| date >= start)
        .unwrap_or(false)
}

/// Every transaction lands in exactly one bucket
#[derive(Debug, Default, PartialEq)]
pub struct MonthlyPartition<'a> {
    pub income: Vec<&'a Transaction>,
    pub expense: Vec<&'a Transaction>,
    /// This month, but neither income nor expense (transfers, unknown types)
    pub other: Vec<&'a Transaction>,
    /// Before this month, or with an unparsable date
    pub earlier: Vec<&'a Transaction>,
}

pub fn partition_by_month(transactions: &[Transaction], now: NaiveDateTime) -> MonthlyPartition<'_> {
    let mut partition = MonthlyPartition::default();
    for transaction in transactions {
        if !in_current_month(transaction, now) {
            partition.earlier.push(transaction);
            continue;
        }
        match transaction.transaction_type {
            TransactionType::Income => partition.income.push(transaction),
            TransactionType::Expense => partition.expense.push(transaction),
            _ => partition.other.push(transaction),
        }
    }
    partition
}

pub fn total_balance(accounts: &[Account]) -> f64 {
    accounts.iter().map(|account| account.current_balance).sum()
}

/// The three dashboard cards
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub monthly_income: f64,
    pub monthly_expense: f64,
    pub total_balance: f64,
}

impl DashboardStats {
    pub fn compute(store: &DataStore, now: NaiveDateTime) -> Self {
        let partition = partition_by_month(&store.transactions, now);
        Self {
            monthly_income: partition.income.iter().map(|t| t.amount).sum(),
            monthly_expense: partition.expense.iter().map(|t| t.amount).sum(),
            total_balance: total_balance(&store.accounts),
        }
    }

    pub fn monthly_income_display(&self) -> String {
        format_currency(self.monthly_income)
    }

    pub fn monthly_expense_display(&self) -> String {
        format_currency(self.monthly_expense)
    }

    pub fn total_balance_display(&self) -> String {
        format_currency(self.total_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SliceUpdate;

    fn at(raw: &str) -> NaiveDateTime {
        parse_timestamp(raw).unwrap()
    }

    fn account(id: i64, name: &str, balance: f64) -> Account {
        Account {
            id,
            name: name.to_string(),
            account_type: "bank_account".to_string(),
            current_balance: balance,
            initial_balance: None,
            currency: None,
            is_active: None,
        }
    }

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            parent_id: None,
        }
    }

    fn transaction(id: i64, kind: &str, amount: f64, date: &str) -> Transaction {
        Transaction {
            id,
            transaction_type: TransactionType::from(kind),
            amount,
            transaction_date: date.to_string(),
            description: None,
            from_account: None,
            to_account: None,
            income_category: None,
            expense_category: None,
            business_direction: None,
        }
    }

    fn planned(id: i64, date: &str) -> PlannedTransaction {
        PlannedTransaction {
            id,
            transaction_type: TransactionType::Expense,
            amount: 300.0,
            planned_date: date.to_string(),
            description: Some("Rent".to_string()),
            is_recurring: false,
            recurrence_pattern: None,
        }
    }

    #[test]
    fn test_select_options_lead_with_placeholder() {
        let options = account_options(&[account(1, "Main", 1000.0)]);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, "Select account");
        assert_eq!(options[1].value, "1");
        assert_eq!(options[1].label, "Main (1\u{a0}000,00\u{a0}₽)");

        let options = category_options(&[]);
        assert_eq!(options, vec![SelectOption::placeholder("Select category")]);
    }

    #[test]
    fn test_row_class_and_label_for_known_types() {
        assert_eq!(row_class(&TransactionType::Income), "income-row");
        assert_eq!(row_class(&TransactionType::Expense), "expense-row");
        assert_eq!(row_class(&TransactionType::Transfer), "transfer-row");
        assert_eq!(type_label(&TransactionType::Income), "Income");
        assert_eq!(type_label(&TransactionType::Expense), "Expense");
        assert_eq!(type_label(&TransactionType::Transfer), "Transfer");
    }

    #[test]
    fn test_unknown_type_falls_back() {
        for raw in ["refund", "", "INCOME", "correction"] {
            let kind = TransactionType::from(raw);
            assert_eq!(row_class(&kind), "");
            assert_eq!(type_label(&kind), raw);
        }
    }

    #[test]
    fn test_category_label_prefers_income_category() {
        let mut salary = transaction(1, "income", 100.0, "2025-01-01T00:00:00");
        salary.income_category = Some(category(1, "Salary"));
        assert_eq!(category_label(&salary), "Salary");

        let mut rent = transaction(2, "expense", 50.0, "2025-01-01T00:00:00");
        rent.expense_category = Some(category(2, "Rent"));
        assert_eq!(category_label(&rent), "Rent");

        let mut both = transaction(3, "income", 1.0, "2025-01-01T00:00:00");
        both.income_category = Some(category(1, "Salary"));
        both.expense_category = Some(category(2, "Rent"));
        assert_eq!(category_label(&both), "Salary");

        let bare = transaction(4, "transfer", 1.0, "2025-01-01T00:00:00");
        assert_eq!(category_label(&bare), UNCATEGORIZED);
    }

    #[test]
    fn test_account_label_omits_absent_sides() {
        let mut transfer = transaction(1, "transfer", 10.0, "2025-01-01T00:00:00");
        transfer.from_account = Some(account(1, "Cash", 0.0));
        transfer.to_account = Some(account(2, "Card", 0.0));
        assert_eq!(account_label(&transfer), "From: Cash | To: Card");

        transfer.to_account = None;
        assert_eq!(account_label(&transfer), "From: Cash");

        transfer.from_account = None;
        transfer.to_account = Some(account(2, "Card", 0.0));
        assert_eq!(account_label(&transfer), "To: Card");

        transfer.to_account = None;
        assert_eq!(account_label(&transfer), "");
    }

    #[test]
    fn test_transaction_row_drops_empty_description() {
        let mut entry = transaction(9, "expense", 42.0, "2025-02-03T04:05:00");
        entry.description = Some(String::new());
        let row = transaction_row(&entry);
        assert_eq!(row.description, None);
        assert_eq!(row.row_class, "expense-row");
        assert_eq!(row.amount, "42,00\u{a0}₽");
        assert_eq!(row.date, "3 Feb 2025, 04:05");
    }

    #[test]
    fn test_recent_transactions_is_a_prefix() {
        let all: Vec<_> = (0..8)
            .map(|id| transaction(id, "income", 1.0, "2025-01-01T00:00:00"))
            .collect();

        for len in 0..=all.len() {
            let source = &all[..len];
            let recent = recent_transactions(source, 5);
            assert_eq!(recent.len(), len.min(5));
            assert_eq!(recent, &source[..recent.len()]);
        }
    }

    #[test]
    fn test_start_of_month_is_local_midnight_on_the_first() {
        assert_eq!(start_of_month(at("2025-03-17T15:42:10")), at("2025-03-01T00:00:00"));
        assert_eq!(start_of_month(at("2025-03-01T00:00:00")), at("2025-03-01T00:00:00"));
    }

    #[test]
    fn test_month_filter_boundaries() {
        let now = at("2025-03-17T12:00:00");
        let included = [
            "2025-03-01T00:00:00",
            "2025-03-01T00:00:01",
            "2025-03-17T11:59",
            "2025-04-02T09:00:00",
        ];
        let excluded = ["2025-02-28T23:59:59", "2024-03-15T10:00:00", "garbage"];

        let start = start_of_month(now);
        for raw in included {
            let entry = transaction(1, "income", 1.0, raw);
            assert!(in_current_month(&entry, now), "{} should be included", raw);
            assert!(at(raw) >= start);
        }
        for raw in excluded {
            let entry = transaction(1, "income", 1.0, raw);
            assert!(!in_current_month(&entry, now), "{} should be excluded", raw);
        }
    }

    #[test]
    fn test_partition_is_total_and_sums_match() {
        let now = at("2025-03-17T12:00:00");
        let transactions = vec![
            transaction(1, "income", 1000.0, "2025-03-02T10:00:00"),
            transaction(2, "expense", 250.0, "2025-03-03T10:00:00"),
            transaction(3, "income", 500.0, "2025-02-20T10:00:00"),
            transaction(4, "transfer", 75.0, "2025-03-05T10:00:00"),
            transaction(5, "expense", 40.5, "2025-03-10T10:00:00"),
            transaction(6, "expense", 99.0, "not a date"),
            transaction(7, "income", 0.25, "2025-03-16T23:00:00"),
        ];

        let partition = partition_by_month(&transactions, now);
        let bucketed = partition.income.len()
            + partition.expense.len()
            + partition.other.len()
            + partition.earlier.len();
        assert_eq!(bucketed, transactions.len());
        assert_eq!(
            partition.income.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 7]
        );
        assert_eq!(
            partition.expense.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![2, 5]
        );
        assert_eq!(partition.other.iter().map(|t| t.id).collect::<Vec<_>>(), vec![4]);
        assert_eq!(
            partition.earlier.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![3, 6]
        );

        let store = DataStore::default().apply(SliceUpdate::Transactions(transactions));
        let stats = DashboardStats::compute(&store, now);
        assert_eq!(stats.monthly_income, 1000.25);
        assert_eq!(stats.monthly_expense, 290.5);
    }

    #[test]
    fn test_total_balance_scenario() {
        let store = DataStore::default().apply(SliceUpdate::Accounts(vec![
            account(1, "Main", 1000.0),
            account(2, "Cash", 500.0),
        ]));
        let stats = DashboardStats::compute(&store, at("2025-03-17T12:00:00"));
        assert_eq!(stats.total_balance, 1500.0);
        assert_eq!(stats.total_balance_display(), format_currency(1500.0));
        assert_eq!(stats.monthly_income_display(), "0,00\u{a0}₽");
    }

    #[test]
    fn test_overdue_is_strictly_before_now() {
        let now = at("2025-03-17T12:00:00");
        assert!(is_overdue(&planned(1, "2025-03-10T09:00:00"), now));
        assert!(!is_overdue(&planned(2, "2025-04-01T09:00:00"), now));
        assert!(!is_overdue(&planned(3, "2025-03-17T12:00:00"), now));
        assert!(!is_overdue(&planned(4, "someday"), now));
    }

    #[test]
    fn test_planned_rows_mark_overdue() {
        let now = at("2025-03-17T12:00:00");
        let rows = planned_rows(
            &[planned(1, "2025-03-10T09:00:00"), planned(2, "2025-04-01T09:00:00")],
            now,
        );
        assert!(rows[0].overdue);
        assert_eq!(rows[0].row_class, "planned-row overdue");
        assert!(!rows[1].overdue);
        assert_eq!(rows[1].row_class, "planned-row");
        assert_eq!(rows[1].scheduled_for, "Scheduled for: 1 Apr 2025, 09:00");
        assert_eq!(rows[1].type_label, "Expense");
        assert_eq!(rows[1].recurrence, None);
    }

    #[test]
    fn test_recurrence_label() {
        let mut item = planned(1, "2025-04-01T09:00:00");
        item.recurrence_pattern = Some("weekly".to_string());
        assert_eq!(recurrence_label(&item), None);

        item.is_recurring = true;
        assert_eq!(recurrence_label(&item).as_deref(), Some("Repeats weekly"));

        item.recurrence_pattern = Some("fortnightly".to_string());
        assert_eq!(recurrence_label(&item).as_deref(), Some("Repeats fortnightly"));

        item.recurrence_pattern = None;
        assert_eq!(recurrence_label(&item).as_deref(), Some("Recurring"));
    }
}
