use chrono::NaiveDateTime;

use crate::format::datetime_local_value;
use crate::{ApiError, CreatePlannedTransactionRequest, CreateTransactionRequest, TransactionType};

/// Which optional groups of the transaction form are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility {
    pub from_account: bool,
    pub to_account: bool,
    pub income_category: bool,
    pub expense_category: bool,
}

impl FieldVisibility {
    pub fn for_type(kind: &TransactionType) -> Self {
        let is = |target: TransactionType| *kind == target;
        Self {
            from_account: is(TransactionType::Expense) || is(TransactionType::Transfer),
            to_account: is(TransactionType::Income) || is(TransactionType::Transfer),
            income_category: is(TransactionType::Income),
            expense_category: is(TransactionType::Expense),
        }
    }
}

/// Inputs of the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    TransactionType,
    Amount,
    Date,
    Description,
    FromAccount,
    ToAccount,
    IncomeCategory,
    ExpenseCategory,
    BusinessDirection,
    /// Planned form only; `"true"` when the checkbox is ticked
    Recurring,
    RecurrencePattern,
}

/// Raw form values, exactly as typed or selected.
///
/// Selects hold the id as text with `""` for the placeholder. Nothing is
/// validated here; conversion to a request only coerces types.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionDraft {
    pub transaction_type: TransactionType,
    pub amount: String,
    pub date: String,
    pub description: String,
    pub from_account: String,
    pub to_account: String,
    pub income_category: String,
    pub expense_category: String,
    pub business_direction: String,
    pub is_recurring: bool,
    pub recurrence_pattern: String,
}

impl TransactionDraft {
    /// Empty draft with the date preset to `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            date: datetime_local_value(now),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::TransactionType => self.transaction_type = TransactionType::from(value),
            DraftField::Amount => self.amount = value,
            DraftField::Date => self.date = value,
            DraftField::Description => self.description = value,
            DraftField::FromAccount => self.from_account = value,
            DraftField::ToAccount => self.to_account = value,
            DraftField::IncomeCategory => self.income_category = value,
            DraftField::ExpenseCategory => self.expense_category = value,
            DraftField::BusinessDirection => self.business_direction = value,
            DraftField::Recurring => self.is_recurring = value == "true",
            DraftField::RecurrencePattern => self.recurrence_pattern = value,
        }
    }

    pub fn visibility(&self) -> FieldVisibility {
        FieldVisibility::for_type(&self.transaction_type)
    }

    pub fn to_request(&self) -> CreateTransactionRequest {
        CreateTransactionRequest {
            transaction_type: self.transaction_type.clone(),
            amount: parse_amount(&self.amount),
            transaction_date: self.date.clone(),
            description: self.description.clone(),
            from_account_id: parse_id(&self.from_account),
            to_account_id: parse_id(&self.to_account),
            income_category_id: parse_id(&self.income_category),
            expense_category_id: parse_id(&self.expense_category),
            business_direction_id: parse_id(&self.business_direction),
        }
    }

    pub fn to_planned_request(&self) -> CreatePlannedTransactionRequest {
        CreatePlannedTransactionRequest {
            transaction_type: self.transaction_type.clone(),
            amount: parse_amount(&self.amount),
            planned_date: self.date.clone(),
            description: self.description.clone(),
            from_account_id: parse_id(&self.from_account),
            to_account_id: parse_id(&self.to_account),
            income_category_id: parse_id(&self.income_category),
            expense_category_id: parse_id(&self.expense_category),
            business_direction_id: parse_id(&self.business_direction),
            is_recurring: self.is_recurring,
            recurrence_pattern: self
                .is_recurring
                .then(|| self.recurrence_pattern.trim().to_string())
                .filter(|pattern| !pattern.is_empty()),
        }
    }

    /// Planned form after a schedule request finished: a fresh draft dated
    /// `now` on success, the same draft on failure so nothing has to be retyped.
    pub fn after_schedule<T>(self, result: &Result<T, ApiError>, now: NaiveDateTime) -> Self {
        match result {
            Ok(_) => TransactionDraft::new(now),
            Err(_) => self,
        }
    }
}

/// Unparsable amounts become NaN and are left for the backend to reject
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Empty select value means "none"
fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

/// The add-transaction modal
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(TransactionDraft),
}

impl ModalState {
    /// Opens with a fresh draft dated `now`
    pub fn open(now: NaiveDateTime) -> ModalState {
        ModalState::Open(TransactionDraft::new(now))
    }

    /// Closing drops the draft, so the next open starts from empty fields
    pub fn close(self) -> ModalState {
        ModalState::Closed
    }

    /// Applies an edit; ignored while closed
    pub fn edit(self, field: DraftField, value: String) -> ModalState {
        match self {
            ModalState::Closed => ModalState::Closed,
            ModalState::Open(mut draft) => {
                draft.set(field, value);
                ModalState::Open(draft)
            }
        }
    }

    pub fn draft(&self) -> Option<&TransactionDraft> {
        match self {
            ModalState::Closed => None,
            ModalState::Open(draft) => Some(draft),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// Modal after a submit finished. Success closes it; a failure keeps it
    /// open with the draft exactly as submitted.
    pub fn after_submit<T>(self, result: &Result<T, ApiError>) -> ModalState {
        match result {
            Ok(_) => ModalState::Closed,
            Err(_) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_timestamp;

    fn now() -> NaiveDateTime {
        parse_timestamp("2025-05-20T14:07:33").unwrap()
    }

    #[test]
    fn test_visibility_table() {
        let income = FieldVisibility::for_type(&TransactionType::Income);
        assert_eq!(
            income,
            FieldVisibility {
                from_account: false,
                to_account: true,
                income_category: true,
                expense_category: false,
            }
        );

        let expense = FieldVisibility::for_type(&TransactionType::Expense);
        assert_eq!(
            expense,
            FieldVisibility {
                from_account: true,
                to_account: false,
                income_category: false,
                expense_category: true,
            }
        );

        let transfer = FieldVisibility::for_type(&TransactionType::Transfer);
        assert_eq!(
            transfer,
            FieldVisibility {
                from_account: true,
                to_account: true,
                income_category: false,
                expense_category: false,
            }
        );
    }

    #[test]
    fn test_unknown_type_hides_everything() {
        let hidden = FieldVisibility::for_type(&TransactionType::from("refund"));
        assert!(!hidden.from_account);
        assert!(!hidden.to_account);
        assert!(!hidden.income_category);
        assert!(!hidden.expense_category);
    }

    #[test]
    fn test_open_defaults_date_to_now() {
        let modal = ModalState::open(now());
        let draft = modal.draft().unwrap();
        assert_eq!(draft.date, "2025-05-20T14:07");
        assert_eq!(draft.transaction_type, TransactionType::Income);
        assert!(draft.amount.is_empty());
        assert_eq!(draft.visibility(), FieldVisibility::for_type(&TransactionType::Income));
    }

    #[test]
    fn test_changing_type_reevaluates_visibility() {
        let modal = ModalState::open(now()).edit(DraftField::TransactionType, "transfer".into());
        let visibility = modal.draft().unwrap().visibility();
        assert!(visibility.from_account && visibility.to_account);
    }

    #[test]
    fn test_close_then_open_resets_fields() {
        let modal = ModalState::open(now())
            .edit(DraftField::Amount, "150".into())
            .edit(DraftField::Description, "Printing".into())
            .close();
        assert!(!modal.is_open());
        assert_eq!(modal.clone().edit(DraftField::Amount, "1".into()), ModalState::Closed);

        let reopened = ModalState::open(now());
        let draft = reopened.draft().unwrap();
        assert!(draft.amount.is_empty());
        assert!(draft.description.is_empty());
    }

    #[test]
    fn test_request_coerces_empty_ids_to_absent() {
        let mut draft = TransactionDraft::new(now());
        draft.set(DraftField::TransactionType, "expense".into());
        draft.set(DraftField::Amount, " 99.90 ".into());
        draft.set(DraftField::FromAccount, "3".into());
        draft.set(DraftField::ExpenseCategory, "".into());
        draft.set(DraftField::BusinessDirection, "12".into());

        let request = draft.to_request();
        assert_eq!(request.transaction_type, TransactionType::Expense);
        assert_eq!(request.amount, 99.9);
        assert_eq!(request.transaction_date, "2025-05-20T14:07");
        assert_eq!(request.from_account_id, Some(3));
        assert_eq!(request.to_account_id, None);
        assert_eq!(request.expense_category_id, None);
        assert_eq!(request.business_direction_id, Some(12));
    }

    #[test]
    fn test_unparsable_amount_is_nan() {
        assert!(parse_amount("").is_nan());
        assert!(parse_amount("twelve").is_nan());
        assert_eq!(parse_amount("12.5"), 12.5);
    }

    #[test]
    fn test_planned_request_uses_draft_date() {
        let mut draft = TransactionDraft::new(now());
        draft.set(DraftField::Date, "2025-06-01T09:00".into());
        draft.set(DraftField::Amount, "300".into());
        let request = draft.to_planned_request();
        assert_eq!(request.planned_date, "2025-06-01T09:00");
        assert_eq!(request.amount, 300.0);
        assert!(!request.is_recurring);
        assert_eq!(request.recurrence_pattern, None);
    }

    #[test]
    fn test_recurrence_pattern_only_sent_when_recurring() {
        let mut draft = TransactionDraft::new(now());
        draft.set(DraftField::RecurrencePattern, "monthly".into());
        assert_eq!(draft.to_planned_request().recurrence_pattern, None);

        draft.set(DraftField::Recurring, "true".into());
        let request = draft.to_planned_request();
        assert!(request.is_recurring);
        assert_eq!(request.recurrence_pattern.as_deref(), Some("monthly"));

        draft.set(DraftField::RecurrencePattern, "".into());
        assert_eq!(draft.to_planned_request().recurrence_pattern, None);

        draft.set(DraftField::Recurring, "false".into());
        assert!(!draft.to_planned_request().is_recurring);
    }

    #[test]
    fn test_failed_submit_keeps_modal_and_draft() {
        let modal = ModalState::open(now())
            .edit(DraftField::TransactionType, "expense".into())
            .edit(DraftField::Amount, "150".into())
            .edit(DraftField::FromAccount, "2".into());
        let submitted = modal.clone();

        let failed: Result<(), ApiError> = Err(ApiError::Status(400));
        let after = modal.after_submit(&failed);
        assert!(after.is_open());
        assert_eq!(after, submitted);
    }

    #[test]
    fn test_successful_submit_closes_modal() {
        let modal = ModalState::open(now()).edit(DraftField::Amount, "150".into());
        let after = modal.after_submit(&Ok::<i64, ApiError>(7));
        assert_eq!(after, ModalState::Closed);
    }

    #[test]
    fn test_schedule_outcome_resets_only_on_success() {
        let mut draft = TransactionDraft::new(now());
        draft.set(DraftField::Amount, "300".into());
        draft.set(DraftField::Recurring, "true".into());

        let failed: Result<(), ApiError> = Err(ApiError::Transport("offline".into()));
        assert_eq!(draft.clone().after_schedule(&failed, now()), draft);

        let later = parse_timestamp("2025-05-21T08:00:00").unwrap();
        let reset = draft.after_schedule(&Ok::<(), ApiError>(()), later);
        assert_eq!(reset, TransactionDraft::new(later));
    }
}
