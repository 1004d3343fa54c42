use std::future::Future;

use shared::{
    ApiError, CreateAccountRequest, CreateNamedRequest, Operation, Slice, UpdateAccountRequest,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_data_store::Loader;
use crate::services::api::ApiClient;
use crate::services::notify;

/// Which named collection a "create" form adds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKind {
    IncomeCategory,
    ExpenseCategory,
    BusinessDirection,
}

impl NamedKind {
    pub fn operation(self) -> Operation {
        match self {
            NamedKind::IncomeCategory => Operation::CreateIncomeCategory,
            NamedKind::ExpenseCategory => Operation::CreateExpenseCategory,
            NamedKind::BusinessDirection => Operation::CreateBusinessDirection,
        }
    }

    pub fn slice(self) -> Slice {
        match self {
            NamedKind::IncomeCategory => Slice::IncomeCategories,
            NamedKind::ExpenseCategory => Slice::ExpenseCategories,
            NamedKind::BusinessDirection => Slice::BusinessDirections,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct SettingsActions {
    pub create_account: Callback<CreateAccountRequest>,
    pub update_account: Callback<(i64, UpdateAccountRequest)>,
    pub deactivate_account: Callback<i64>,
    pub create_named: Callback<(NamedKind, String)>,
}

/// Run a mutation, confirm it, then refresh the slice it touched
fn mutate<T, F>(operation: Operation, slice: Slice, loader: Loader, call: F)
where
    T: 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    spawn_local(async move {
        match call.await {
            Ok(_) => {
                notify::success(operation);
                loader.load(slice).await;
            }
            Err(e) => notify::failure(operation, &e),
        }
    });
}

#[hook]
pub fn use_settings(api_client: &ApiClient, loader: &Loader) -> SettingsActions {
    let create_account = {
        let api_client = api_client.clone();
        let loader = loader.clone();
        use_callback((), move |request: CreateAccountRequest, _| {
            let api_client = api_client.clone();
            mutate(
                Operation::CreateAccount,
                Slice::Accounts,
                loader.clone(),
                async move { api_client.create_account(&request).await },
            );
        })
    };

    let update_account = {
        let api_client = api_client.clone();
        let loader = loader.clone();
        use_callback((), move |(account_id, request): (i64, UpdateAccountRequest), _| {
            let api_client = api_client.clone();
            mutate(
                Operation::UpdateAccount,
                Slice::Accounts,
                loader.clone(),
                async move { api_client.update_account(account_id, &request).await },
            );
        })
    };

    let deactivate_account = {
        let api_client = api_client.clone();
        let loader = loader.clone();
        use_callback((), move |account_id: i64, _| {
            let api_client = api_client.clone();
            mutate(
                Operation::DeactivateAccount,
                Slice::Accounts,
                loader.clone(),
                async move { api_client.deactivate_account(account_id).await },
            );
        })
    };

    let create_named = {
        let api_client = api_client.clone();
        let loader = loader.clone();
        use_callback((), move |(kind, name): (NamedKind, String), _| {
            let api_client = api_client.clone();
            let request = CreateNamedRequest { name };
            let (operation, slice) = (kind.operation(), kind.slice());
            match kind {
                NamedKind::IncomeCategory => mutate(operation, slice, loader.clone(), async move {
                    api_client.create_income_category(&request).await
                }),
                NamedKind::ExpenseCategory => mutate(operation, slice, loader.clone(), async move {
                    api_client.create_expense_category(&request).await
                }),
                NamedKind::BusinessDirection => mutate(operation, slice, loader.clone(), async move {
                    api_client.create_business_direction(&request).await
                }),
            }
        })
    };

    SettingsActions {
        create_account,
        update_account,
        deactivate_account,
        create_named,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_named_kinds_reload_their_own_slice() {
        assert_eq!(NamedKind::IncomeCategory.slice(), Slice::IncomeCategories);
        assert_eq!(NamedKind::ExpenseCategory.slice(), Slice::ExpenseCategories);
        assert_eq!(NamedKind::BusinessDirection.slice(), Slice::BusinessDirections);
        assert_eq!(
            NamedKind::BusinessDirection.operation(),
            Operation::CreateBusinessDirection
        );
    }
}
