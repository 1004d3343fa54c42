use std::rc::Rc;

use shared::view::{account_options, category_options, direction_options};
use shared::{DataStore, DraftField, TransactionDraft, TransactionType};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::select_field::SelectField;

#[derive(Properties, PartialEq)]
pub struct DraftFieldsProps {
    pub draft: TransactionDraft,
    pub store: Rc<DataStore>,
    pub on_edit: Callback<(DraftField, String)>,
    /// Prepended to every element id so two forms can share a page
    #[prop_or_default]
    pub id_prefix: AttrValue,
    #[prop_or(AttrValue::from("Date and time"))]
    pub date_label: AttrValue,
}

/// Inputs shared by the transaction modal and the planned transaction form
#[function_component(DraftFields)]
pub fn draft_fields(props: &DraftFieldsProps) -> Html {
    let id = |name: &str| format!("{}{}", props.id_prefix, name);
    let visibility = props.draft.visibility();

    let on_select = |field: DraftField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |value: String| on_edit.emit((field, value)))
    };

    let on_type_change = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit((DraftField::TransactionType, select.value()));
        })
    };

    let on_input = |field: DraftField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        })
    };

    let on_description = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((DraftField::Description, area.value()));
        })
    };

    let accounts = account_options(&props.store.accounts);

    html! {
        <>
            <div class="form-group">
                <label for={id("transaction-type")}>{"Type"}</label>
                <select id={id("transaction-type")} class="form-select" onchange={on_type_change}>
                    {for TransactionType::selectable().iter().map(|kind| {
                        html! {
                            <option value={kind.as_str().to_string()} selected={*kind == props.draft.transaction_type}>
                                {shared::view::type_label(kind).to_string()}
                            </option>
                        }
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for={id("transaction-amount")}>{"Amount"}</label>
                <input
                    id={id("transaction-amount")}
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    value={props.draft.amount.clone()}
                    oninput={on_input(DraftField::Amount)}
                />
            </div>

            <div class="form-group">
                <label for={id("transaction-date")}>{props.date_label.clone()}</label>
                <input
                    id={id("transaction-date")}
                    type="datetime-local"
                    value={props.draft.date.clone()}
                    oninput={on_input(DraftField::Date)}
                />
            </div>

            <SelectField
                id={AttrValue::from(id("from-account"))}
                label="From account"
                options={accounts.clone()}
                value={props.draft.from_account.clone()}
                on_change={on_select(DraftField::FromAccount)}
                visible={visibility.from_account}
            />
            <SelectField
                id={AttrValue::from(id("to-account"))}
                label="To account"
                options={accounts}
                value={props.draft.to_account.clone()}
                on_change={on_select(DraftField::ToAccount)}
                visible={visibility.to_account}
            />
            <SelectField
                id={AttrValue::from(id("income-category"))}
                label="Income category"
                options={category_options(&props.store.income_categories)}
                value={props.draft.income_category.clone()}
                on_change={on_select(DraftField::IncomeCategory)}
                visible={visibility.income_category}
            />
            <SelectField
                id={AttrValue::from(id("expense-category"))}
                label="Expense category"
                options={category_options(&props.store.expense_categories)}
                value={props.draft.expense_category.clone()}
                on_change={on_select(DraftField::ExpenseCategory)}
                visible={visibility.expense_category}
            />
            <SelectField
                id={AttrValue::from(id("business-direction"))}
                label="Business direction"
                options={direction_options(&props.store.business_directions)}
                value={props.draft.business_direction.clone()}
                on_change={on_select(DraftField::BusinessDirection)}
            />

            <div class="form-group">
                <label for={id("transaction-description")}>{"Description"}</label>
                <textarea
                    id={id("transaction-description")}
                    rows="2"
                    value={props.draft.description.clone()}
                    oninput={on_description}
                />
            </div>
        </>
    }
}
