use std::rc::Rc;

use shared::transaction_form::parse_amount;
use shared::view::{account_rows, category_rows, direction_rows, AccountRow, NameRow};
use shared::{CreateAccountRequest, DataStore, UpdateAccountRequest, ACCOUNT_TYPES};
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_settings::{NamedKind, SettingsActions};

#[derive(Properties, PartialEq)]
struct NameFormProps {
    id: AttrValue,
    placeholder: AttrValue,
    kind: NamedKind,
    on_create: Callback<(NamedKind, String)>,
}

#[function_component(NameForm)]
fn name_form(props: &NameFormProps) -> Html {
    let name = use_state(String::new);

    let on_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let kind = props.kind;
        let on_create = props.on_create.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_create.emit((kind, (*name).clone()));
        })
    };

    html! {
        <form id={props.id.clone()} class="inline-form" onsubmit={on_submit}>
            <input
                type="text"
                placeholder={props.placeholder.clone()}
                value={(*name).clone()}
                oninput={on_input}
            />
            <button type="submit" class="btn btn-primary btn-small">{"Add"}</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct AccountItemProps {
    row: AccountRow,
    on_update: Callback<(i64, UpdateAccountRequest)>,
    on_deactivate: Callback<i64>,
}

/// One account line; "Edit" swaps it for an inline name and type form
#[function_component(AccountItem)]
fn account_item(props: &AccountItemProps) -> Html {
    let editing = use_state(|| false);
    let name = use_state(|| props.row.name.clone());
    let account_type = use_state(|| props.row.account_type.clone());

    let on_edit = {
        let editing = editing.clone();
        let name = name.clone();
        let account_type = account_type.clone();
        let row = props.row.clone();
        Callback::from(move |_: MouseEvent| {
            name.set(row.name.clone());
            account_type.set(row.account_type.clone());
            editing.set(true);
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(false))
    };

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_type_change = {
        let account_type = account_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            account_type.set(select.value());
        })
    };

    let on_save = {
        let editing = editing.clone();
        let name = name.clone();
        let account_type = account_type.clone();
        let on_update = props.on_update.clone();
        let account_id = props.row.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_update.emit((
                account_id,
                UpdateAccountRequest {
                    name: (*name).clone(),
                    account_type: (*account_type).clone(),
                },
            ));
            editing.set(false);
        })
    };

    let on_deactivate = {
        let on_deactivate = props.on_deactivate.clone();
        let account_id = props.row.id;
        Callback::from(move |_: MouseEvent| on_deactivate.emit(account_id))
    };

    if *editing {
        return html! {
            <li class="account-item editing">
                <form class="inline-form" onsubmit={on_save}>
                    <input type="text" value={(*name).clone()} oninput={on_name_input} />
                    <select onchange={on_type_change}>
                        {for ACCOUNT_TYPES.iter().map(|(value, label)| html! {
                            <option value={*value} selected={*value == account_type.as_str()}>{*label}</option>
                        })}
                    </select>
                    <button type="submit" class="btn btn-primary btn-small">{"Save"}</button>
                    <button type="button" class="btn btn-secondary btn-small" onclick={on_cancel}>
                        {"Cancel"}
                    </button>
                </form>
            </li>
        };
    }

    html! {
        <li class="account-item">
            <div>
                <span class="account-name">{&props.row.name}</span>
                <span class="account-type">{format!("({})", props.row.account_type)}</span>
            </div>
            <span class="account-balance">{&props.row.balance}</span>
            <button type="button" class="btn btn-secondary btn-small" onclick={on_edit}>
                {"Edit"}
            </button>
            <button type="button" class="btn btn-secondary btn-small" onclick={on_deactivate}>
                {"Deactivate"}
            </button>
        </li>
    }
}

fn name_list(id: &'static str, rows: Vec<NameRow>) -> Html {
    html! {
        <ul {id} class="name-list">
            {for rows.into_iter().map(|row| html! {
                <li key={row.id} class="name-item">{row.name}</li>
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub store: Rc<DataStore>,
    pub actions: SettingsActions,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let account_name = use_state(String::new);
    let account_type = use_state(|| ACCOUNT_TYPES[0].0.to_string());
    let initial_balance = use_state(|| "0".to_string());

    let on_name_input = {
        let account_name = account_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            account_name.set(input.value());
        })
    };

    let on_type_change = {
        let account_type = account_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            account_type.set(select.value());
        })
    };

    let on_balance_input = {
        let initial_balance = initial_balance.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            initial_balance.set(input.value());
        })
    };

    let on_create_account = {
        let account_name = account_name.clone();
        let account_type = account_type.clone();
        let initial_balance = initial_balance.clone();
        let create_account = props.actions.create_account.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            create_account.emit(CreateAccountRequest {
                name: (*account_name).clone(),
                account_type: (*account_type).clone(),
                initial_balance: parse_amount(&initial_balance),
            });
        })
    };

    html! {
        <div class="settings-grid">
            <div class="settings-card">
                <h3>{"Accounts"}</h3>
                <ul id="accounts-list" class="name-list">
                    {for account_rows(&props.store.accounts).into_iter().map(|row| html! {
                        <AccountItem
                            key={row.id}
                            row={row.clone()}
                            on_update={props.actions.update_account.clone()}
                            on_deactivate={props.actions.deactivate_account.clone()}
                        />
                    })}
                </ul>
                <form id="account-form" class="stacked-form" onsubmit={on_create_account}>
                    <input
                        type="text"
                        placeholder="Account name"
                        value={(*account_name).clone()}
                        oninput={on_name_input}
                    />
                    <select onchange={on_type_change}>
                        {for ACCOUNT_TYPES.iter().map(|(value, label)| html! {
                            <option value={*value} selected={*value == account_type.as_str()}>{*label}</option>
                        })}
                    </select>
                    <input
                        type="number"
                        step="0.01"
                        placeholder="Initial balance"
                        value={(*initial_balance).clone()}
                        oninput={on_balance_input}
                    />
                    <button type="submit" class="btn btn-primary btn-small">{"Add account"}</button>
                </form>
            </div>

            <div class="settings-card">
                <h3>{"Income categories"}</h3>
                {name_list("income-categories-list", category_rows(&props.store.income_categories))}
                <NameForm
                    id="income-category-form"
                    placeholder="New income category"
                    kind={NamedKind::IncomeCategory}
                    on_create={props.actions.create_named.clone()}
                />
            </div>

            <div class="settings-card">
                <h3>{"Expense categories"}</h3>
                {name_list("expense-categories-list", category_rows(&props.store.expense_categories))}
                <NameForm
                    id="expense-category-form"
                    placeholder="New expense category"
                    kind={NamedKind::ExpenseCategory}
                    on_create={props.actions.create_named.clone()}
                />
            </div>

            <div class="settings-card">
                <h3>{"Business directions"}</h3>
                {name_list("directions-list", direction_rows(&props.store.business_directions))}
                <NameForm
                    id="direction-form"
                    placeholder="New business direction"
                    kind={NamedKind::BusinessDirection}
                    on_create={props.actions.create_named.clone()}
                />
            </div>
        </div>
    }
}
