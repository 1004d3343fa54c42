use crate::{Account, ApiError, BusinessDirection, Category, PlannedTransaction, Transaction};
use crate::notify::Operation;

/// One collection of the store, named for loaders and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    Accounts,
    IncomeCategories,
    ExpenseCategories,
    BusinessDirections,
    Transactions,
    PlannedTransactions,
}

impl Slice {
    pub const ALL: [Slice; 6] = [
        Slice::Accounts,
        Slice::IncomeCategories,
        Slice::ExpenseCategories,
        Slice::BusinessDirections,
        Slice::Transactions,
        Slice::PlannedTransactions,
    ];

    /// List endpoint the slice is loaded from
    pub fn endpoint(self) -> &'static str {
        match self {
            Slice::Accounts => "/accounts",
            Slice::IncomeCategories => "/income-categories",
            Slice::ExpenseCategories => "/expense-categories",
            Slice::BusinessDirections => "/business-directions",
            Slice::Transactions => "/transactions",
            Slice::PlannedTransactions => "/planned-transactions",
        }
    }

    pub fn load_operation(self) -> Operation {
        match self {
            Slice::Accounts => Operation::LoadAccounts,
            Slice::IncomeCategories => Operation::LoadIncomeCategories,
            Slice::ExpenseCategories => Operation::LoadExpenseCategories,
            Slice::BusinessDirections => Operation::LoadBusinessDirections,
            Slice::Transactions => Operation::LoadTransactions,
            Slice::PlannedTransactions => Operation::LoadPlannedTransactions,
        }
    }
}

/// A freshly loaded collection, replacing its slice wholesale
#[derive(Debug, Clone, PartialEq)]
pub enum SliceUpdate {
    Accounts(Vec<Account>),
    IncomeCategories(Vec<Category>),
    ExpenseCategories(Vec<Category>),
    BusinessDirections(Vec<BusinessDirection>),
    Transactions(Vec<Transaction>),
    PlannedTransactions(Vec<PlannedTransaction>),
}

impl SliceUpdate {
    pub fn slice(&self) -> Slice {
        match self {
            SliceUpdate::Accounts(_) => Slice::Accounts,
            SliceUpdate::IncomeCategories(_) => Slice::IncomeCategories,
            SliceUpdate::ExpenseCategories(_) => Slice::ExpenseCategories,
            SliceUpdate::BusinessDirections(_) => Slice::BusinessDirections,
            SliceUpdate::Transactions(_) => Slice::Transactions,
            SliceUpdate::PlannedTransactions(_) => Slice::PlannedTransactions,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SliceUpdate::Accounts(items) => items.len(),
            SliceUpdate::IncomeCategories(items) => items.len(),
            SliceUpdate::ExpenseCategories(items) => items.len(),
            SliceUpdate::BusinessDirections(items) => items.len(),
            SliceUpdate::Transactions(items) => items.len(),
            SliceUpdate::PlannedTransactions(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable snapshot of everything loaded from the backend.
///
/// The snapshot is never edited in place: [`DataStore::apply`] returns a new
/// snapshot with exactly one slice swapped out. Failed loads produce no
/// update, so the previous (stale) slice stays visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataStore {
    pub accounts: Vec<Account>,
    pub income_categories: Vec<Category>,
    pub expense_categories: Vec<Category>,
    pub business_directions: Vec<BusinessDirection>,
    pub transactions: Vec<Transaction>,
    pub planned_transactions: Vec<PlannedTransaction>,
}

impl DataStore {
    pub fn apply(&self, update: SliceUpdate) -> DataStore {
        let mut next = self.clone();
        match update {
            SliceUpdate::Accounts(items) => next.accounts = items,
            SliceUpdate::IncomeCategories(items) => next.income_categories = items,
            SliceUpdate::ExpenseCategories(items) => next.expense_categories = items,
            SliceUpdate::BusinessDirections(items) => next.business_directions = items,
            SliceUpdate::Transactions(items) => next.transactions = items,
            SliceUpdate::PlannedTransactions(items) => next.planned_transactions = items,
        }
        next
    }

    /// Snapshot after a load finished. A failed load leaves every slice,
    /// the one it was refreshing included, exactly as it was.
    pub fn after_load(&self, result: Result<SliceUpdate, ApiError>) -> DataStore {
        match result {
            Ok(update) => self.apply(update),
            Err(_) => self.clone(),
        }
    }
}
