use shared::{DraftField, ModalState, Operation, Slice};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_data_store::Loader;
use crate::services::api::ApiClient;
use crate::services::{clock, notify};

pub struct UseTransactionFormResult {
    pub modal: ModalState,
    pub actions: TransactionFormActions,
}

#[derive(Clone, PartialEq)]
pub struct TransactionFormActions {
    pub open: Callback<()>,
    pub close: Callback<()>,
    pub edit: Callback<(DraftField, String)>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_transaction_form(api_client: &ApiClient, loader: &Loader) -> UseTransactionFormResult {
    let modal = use_state(ModalState::default);

    let open = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(ModalState::open(clock::now())))
    };

    let close = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set((*modal).clone().close()))
    };

    let edit = {
        let modal = modal.clone();
        Callback::from(move |(field, value): (DraftField, String)| {
            modal.set((*modal).clone().edit(field, value));
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let loader = loader.clone();
        let modal = modal.clone();

        Callback::from(move |_| {
            let Some(draft) = modal.draft() else {
                return;
            };
            let request = draft.to_request();
            let submitted = (*modal).clone();
            let api_client = api_client.clone();
            let loader = loader.clone();
            let modal = modal.clone();

            spawn_local(async move {
                let result = api_client.create_transaction(&request).await;
                match &result {
                    Ok(transaction) => {
                        log::info!("Created transaction {}", transaction.id);
                        notify::success(Operation::CreateTransaction);
                    }
                    Err(e) => notify::failure(Operation::CreateTransaction, e),
                }

                let next = submitted.clone().after_submit(&result);
                if next != submitted {
                    modal.set(next);
                }
                if result.is_ok() {
                    // balances move with every transaction
                    loader.reload(&[Slice::Transactions, Slice::Accounts]).await;
                }
            });
        })
    };

    UseTransactionFormResult {
        modal: (*modal).clone(),
        actions: TransactionFormActions {
            open,
            close,
            edit,
            submit,
        },
    }
}
