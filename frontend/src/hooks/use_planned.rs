use shared::{DraftField, Operation, Slice, TransactionDraft};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_data_store::Loader;
use crate::services::api::ApiClient;
use crate::services::{clock, notify};

pub struct UsePlannedResult {
    pub draft: TransactionDraft,
    pub actions: PlannedActions,
}

#[derive(Clone, PartialEq)]
pub struct PlannedActions {
    pub complete: Callback<i64>,
    pub edit: Callback<(DraftField, String)>,
    pub schedule: Callback<()>,
}

#[hook]
pub fn use_planned(api_client: &ApiClient, loader: &Loader) -> UsePlannedResult {
    let draft = use_state(|| TransactionDraft::new(clock::now()));

    let complete = {
        let api_client = api_client.clone();
        let loader = loader.clone();

        use_callback((), move |planned_id: i64, _| {
            let api_client = api_client.clone();
            let loader = loader.clone();

            spawn_local(async move {
                match api_client.complete_planned_transaction(planned_id).await {
                    Ok(transaction) => {
                        log::info!(
                            "Planned transaction {} posted as {}",
                            planned_id,
                            transaction.id
                        );
                        notify::success(Operation::CompletePlannedTransaction);
                        loader
                            .reload(&[
                                Slice::PlannedTransactions,
                                Slice::Transactions,
                                Slice::Accounts,
                            ])
                            .await;
                    }
                    Err(e) => notify::failure(Operation::CompletePlannedTransaction, &e),
                }
            });
        })
    };

    let edit = {
        let draft = draft.clone();
        Callback::from(move |(field, value): (DraftField, String)| {
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
        })
    };

    let schedule = {
        let api_client = api_client.clone();
        let loader = loader.clone();
        let draft = draft.clone();

        Callback::from(move |_| {
            let request = draft.to_planned_request();
            let submitted = (*draft).clone();
            let api_client = api_client.clone();
            let loader = loader.clone();
            let draft = draft.clone();

            spawn_local(async move {
                let result = api_client.create_planned_transaction(&request).await;
                match &result {
                    Ok(planned) => {
                        log::info!("Scheduled planned transaction {}", planned.id);
                        notify::success(Operation::CreatePlannedTransaction);
                    }
                    Err(e) => notify::failure(Operation::CreatePlannedTransaction, e),
                }

                let next = submitted.clone().after_schedule(&result, clock::now());
                if next != submitted {
                    draft.set(next);
                }
                if result.is_ok() {
                    loader.load(Slice::PlannedTransactions).await;
                }
            });
        })
    };

    UsePlannedResult {
        draft: (*draft).clone(),
        actions: PlannedActions {
            complete,
            edit,
            schedule,
        },
    }
}
