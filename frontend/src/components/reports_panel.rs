use shared::reports::CategoryGroup;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_reports::{ReportsActions, ReportsState};

#[derive(Properties, PartialEq)]
pub struct ReportsPanelProps {
    pub state: ReportsState,
    pub actions: ReportsActions,
}

fn category_group(group: &CategoryGroup) -> Html {
    html! {
        <div class="report-group">
            <h4 class={group.tone.class()}>{group.title}</h4>
            <ul>
                {for group.lines.iter().map(|line| html! {
                    <li class="report-line">
                        <span>{&line.category}</span>
                        <span class="report-amount">{&line.amount}</span>
                    </li>
                })}
            </ul>
        </div>
    }
}

#[function_component(ReportsPanel)]
pub fn reports_panel(props: &ReportsPanelProps) -> Html {
    let on_date = |setter: &Callback<String>| {
        let setter = setter.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            setter.emit(input.value());
        })
    };

    let on_generate = {
        let generate = props.actions.generate.clone();
        Callback::from(move |_: MouseEvent| generate.emit(()))
    };

    let state = &props.state;

    html! {
        <>
            <div class="report-controls">
                <div class="form-group">
                    <label for="report-start-date">{"From"}</label>
                    <input
                        id="report-start-date"
                        type="date"
                        value={state.start_date.clone()}
                        onchange={on_date(&props.actions.set_start_date)}
                    />
                </div>
                <div class="form-group">
                    <label for="report-end-date">{"To"}</label>
                    <input
                        id="report-end-date"
                        type="date"
                        value={state.end_date.clone()}
                        onchange={on_date(&props.actions.set_end_date)}
                    />
                </div>
                <button id="generate-reports" type="button" class="btn btn-primary" onclick={on_generate} disabled={state.loading}>
                    {if state.loading { "Generating..." } else { "Generate" }}
                </button>
            </div>

            <div id="cash-flow-report" class="report-card">
                <h3>{"Cash flow"}</h3>
                {match &state.cash_flow {
                    Some(view) => html! {
                        <dl class="report-figures">
                            <dt>{"Income"}</dt>
                            <dd class="text-positive">{&view.total_income}</dd>
                            <dt>{"Expenses"}</dt>
                            <dd class="text-negative">{&view.total_expense}</dd>
                            <dt>{"Net flow"}</dt>
                            <dd class={view.net_tone.class()}>{&view.net_flow}</dd>
                        </dl>
                    },
                    None => html! { <p class="empty-state">{"Pick a period and generate"}</p> },
                }}
            </div>

            <div id="profit-loss-report" class="report-card">
                <h3>{"Profit and loss"}</h3>
                {match &state.profit_loss {
                    Some(view) if view.is_empty() => html! {
                        <p class="empty-state">{"No income or expenses in this period"}</p>
                    },
                    Some(view) => html! {
                        <>
                            {for view.income.iter().map(category_group)}
                            {for view.expense.iter().map(category_group)}
                        </>
                    },
                    None => html! { <p class="empty-state">{"Pick a period and generate"}</p> },
                }}
            </div>
        </>
    }
}
