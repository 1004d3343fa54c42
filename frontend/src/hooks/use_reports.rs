use shared::{CashFlowView, ProfitLossView, ReportOutcome};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::notify;

#[derive(Clone, PartialEq, Default)]
pub struct ReportsState {
    pub start_date: String,
    pub end_date: String,
    pub cash_flow: Option<CashFlowView>,
    pub profit_loss: Option<ProfitLossView>,
    pub loading: bool,
}

pub struct UseReportsResult {
    pub state: ReportsState,
    pub actions: ReportsActions,
}

#[derive(Clone, PartialEq)]
pub struct ReportsActions {
    pub set_start_date: Callback<String>,
    pub set_end_date: Callback<String>,
    pub generate: Callback<()>,
}

#[hook]
pub fn use_reports(api_client: &ApiClient) -> UseReportsResult {
    let start_date = use_state(String::new);
    let end_date = use_state(String::new);
    let cash_flow = use_state(|| Option::<CashFlowView>::None);
    let profit_loss = use_state(|| Option::<ProfitLossView>::None);
    let loading = use_state(|| false);

    let set_start_date = {
        let start_date = start_date.clone();
        Callback::from(move |value: String| start_date.set(value))
    };

    let set_end_date = {
        let end_date = end_date.clone();
        Callback::from(move |value: String| end_date.set(value))
    };

    let generate = {
        let api_client = api_client.clone();
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let cash_flow = cash_flow.clone();
        let profit_loss = profit_loss.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let sent = shared::request_reports(&start_date, &end_date, |range| {
                let api_client = api_client.clone();
                let cash_flow = cash_flow.clone();
                let profit_loss = profit_loss.clone();
                let loading = loading.clone();

                spawn_local(async move {
                    loading.set(true);
                    log::debug!("Generating reports for {}", range.query());

                    let (cash_flow_result, profit_loss_result) = futures::join!(
                        api_client.cash_flow(&range),
                        api_client.profit_loss(&range)
                    );
                    let outcome = ReportOutcome::combine(cash_flow_result, profit_loss_result);

                    if outcome.cash_flow.is_some() {
                        cash_flow.set(outcome.cash_flow);
                    }
                    if outcome.profit_loss.is_some() {
                        profit_loss.set(outcome.profit_loss);
                    }
                    if let Some(failure) = &outcome.failure {
                        notify::show(failure);
                    }

                    loading.set(false);
                });
            });
            if let Err(notification) = sent {
                notify::show(&notification);
            }
        })
    };

    let state = ReportsState {
        start_date: (*start_date).clone(),
        end_date: (*end_date).clone(),
        cash_flow: (*cash_flow).clone(),
        profit_loss: (*profit_loss).clone(),
        loading: *loading,
    };

    UseReportsResult {
        state,
        actions: ReportsActions {
            set_start_date,
            set_end_date,
            generate,
        },
    }
}
