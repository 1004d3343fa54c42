use std::rc::Rc;

use shared::view::{recent_transactions, transaction_rows, DashboardStats};
use shared::DataStore;
use yew::prelude::*;

use crate::components::transaction_list::TransactionList;
use crate::services::clock;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub store: Rc<DataStore>,
    pub recent_limit: usize,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let stats = DashboardStats::compute(&props.store, clock::now());
    let recent = transaction_rows(recent_transactions(
        &props.store.transactions,
        props.recent_limit,
    ));

    html! {
        <>
            <div class="stats-grid">
                <div class="stat-card">
                    <p class="stat-label">{"Income this month"}</p>
                    <p id="monthly-income" class="stat-value text-positive">
                        {stats.monthly_income_display()}
                    </p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">{"Expenses this month"}</p>
                    <p id="monthly-expense" class="stat-value text-negative">
                        {stats.monthly_expense_display()}
                    </p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">{"Total balance"}</p>
                    <p id="total-balance" class="stat-value">{stats.total_balance_display()}</p>
                </div>
            </div>

            <h2 class="section-subtitle">{"Recent transactions"}</h2>
            <TransactionList id="recent-transactions" rows={recent} compact=true />
        </>
    }
}
