use std::fmt;

use crate::ReportError;

/// Every user-triggered or bootstrap operation that reports back to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    LoadAccounts,
    LoadIncomeCategories,
    LoadExpenseCategories,
    LoadBusinessDirections,
    LoadTransactions,
    LoadPlannedTransactions,
    CreateTransaction,
    CompletePlannedTransaction,
    CreatePlannedTransaction,
    GenerateReports,
    InitTestData,
    CreateAccount,
    DeactivateAccount,
    UpdateAccount,
    CreateIncomeCategory,
    CreateExpenseCategory,
    CreateBusinessDirection,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::LoadAccounts => "Failed to load accounts",
            Operation::LoadIncomeCategories => "Failed to load income categories",
            Operation::LoadExpenseCategories => "Failed to load expense categories",
            Operation::LoadBusinessDirections => "Failed to load business directions",
            Operation::LoadTransactions => "Failed to load transactions",
            Operation::LoadPlannedTransactions => "Failed to load planned transactions",
            Operation::CreateTransaction => "Failed to create transaction",
            Operation::CompletePlannedTransaction => "Failed to complete planned transaction",
            Operation::CreatePlannedTransaction => "Failed to schedule transaction",
            Operation::GenerateReports => "Failed to generate reports",
            Operation::InitTestData => "Failed to create test data",
            Operation::CreateAccount => "Failed to create account",
            Operation::DeactivateAccount => "Failed to deactivate account",
            Operation::UpdateAccount => "Failed to update account",
            Operation::CreateIncomeCategory => "Failed to create income category",
            Operation::CreateExpenseCategory => "Failed to create expense category",
            Operation::CreateBusinessDirection => "Failed to create business direction",
        }
    }

    /// Loads are silent on success; mutations confirm
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Operation::LoadAccounts
            | Operation::LoadIncomeCategories
            | Operation::LoadExpenseCategories
            | Operation::LoadBusinessDirections
            | Operation::LoadTransactions
            | Operation::LoadPlannedTransactions
            | Operation::GenerateReports => None,
            Operation::CreateTransaction => Some("Transaction created successfully"),
            Operation::CompletePlannedTransaction => Some("Planned transaction completed"),
            Operation::CreatePlannedTransaction => Some("Transaction scheduled"),
            Operation::InitTestData => Some("Test data created"),
            Operation::CreateAccount => Some("Account created"),
            Operation::DeactivateAccount => Some("Account deactivated"),
            Operation::UpdateAccount => Some("Account updated"),
            Operation::CreateIncomeCategory => Some("Income category created"),
            Operation::CreateExpenseCategory => Some("Expense category created"),
            Operation::CreateBusinessDirection => Some("Business direction created"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

/// A blocking message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn failure(operation: Operation) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: operation.failure_message().to_string(),
        }
    }

    pub fn success(operation: Operation) -> Option<Self> {
        operation.success_message().map(|message| Self {
            kind: NotificationKind::Success,
            message: message.to_string(),
        })
    }

    /// Full alert text, e.g. `Error: Failed to load accounts`
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl From<ReportError> for Notification {
    fn from(error: ReportError) -> Self {
        let message = match error {
            ReportError::MissingDates => "Select a period for the report",
        };
        Self {
            kind: NotificationKind::Error,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            NotificationKind::Error => "Error: ",
            NotificationKind::Success => "Success: ",
        };
        write!(f, "{}{}", prefix, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_text_has_error_prefix() {
        let notification = Notification::failure(Operation::LoadAccounts);
        assert_eq!(notification.text(), "Error: Failed to load accounts");
    }

    #[test]
    fn test_success_text_has_success_prefix() {
        let notification = Notification::success(Operation::CreateTransaction).unwrap();
        assert_eq!(notification.text(), "Success: Transaction created successfully");
    }

    #[test]
    fn test_loads_have_no_success_notification() {
        for operation in [
            Operation::LoadAccounts,
            Operation::LoadTransactions,
            Operation::LoadPlannedTransactions,
        ] {
            assert_eq!(Notification::success(operation), None);
        }
    }

    #[test]
    fn test_missing_report_period_is_an_error() {
        let notification = Notification::from(ReportError::MissingDates);
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.text(), "Error: Select a period for the report");
    }
}
