use std::rc::Rc;

use shared::view::planned_rows;
use shared::{DataStore, DraftField, TransactionDraft, RECURRENCE_PATTERNS};
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::components::draft_fields::DraftFields;
use crate::hooks::use_planned::PlannedActions;
use crate::services::clock;

#[derive(Properties, PartialEq)]
pub struct PlannedSectionProps {
    pub store: Rc<DataStore>,
    pub draft: TransactionDraft,
    pub actions: PlannedActions,
}

#[function_component(PlannedSection)]
pub fn planned_section(props: &PlannedSectionProps) -> Html {
    let rows = planned_rows(&props.store.planned_transactions, clock::now());

    let on_submit = {
        let schedule = props.actions.schedule.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            schedule.emit(());
        })
    };

    let on_recurring = {
        let edit = props.actions.edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit.emit((DraftField::Recurring, input.checked().to_string()));
        })
    };

    let on_pattern = {
        let edit = props.actions.edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            edit.emit((DraftField::RecurrencePattern, select.value()));
        })
    };

    html! {
        <>
            <ul id="planned-list" class="planned-list">
                {if rows.is_empty() {
                    html! { <li class="empty-state">{"Nothing scheduled"}</li> }
                } else {
                    html! {
                        {for rows.into_iter().map(|row| {
                            let on_complete = {
                                let complete = props.actions.complete.clone();
                                let planned_id = row.id;
                                Callback::from(move |_: MouseEvent| complete.emit(planned_id))
                            };
                            html! {
                                <li key={row.id} class={row.row_class}>
                                    <div class="planned-main">
                                        <div class="planned-heading">
                                            <p class="transaction-type">{&row.type_label}</p>
                                            <p class="transaction-amount">{&row.amount}</p>
                                        </div>
                                        <p class="planned-date">{&row.scheduled_for}</p>
                                        {for row.description.iter().map(|description| html! {
                                            <p class="transaction-description">{description}</p>
                                        })}
                                        {for row.recurrence.iter().map(|recurrence| html! {
                                            <p class="recurrence-badge">{recurrence}</p>
                                        })}
                                        {if row.overdue {
                                            html! { <p class="overdue-badge">{"Overdue"}</p> }
                                        } else {
                                            html! {}
                                        }}
                                    </div>
                                    <button type="button" class="btn btn-success btn-small" onclick={on_complete}>
                                        {"Complete"}
                                    </button>
                                </li>
                            }
                        })}
                    }
                }}
            </ul>

            <h2 class="section-subtitle">{"Schedule a transaction"}</h2>
            <form id="planned-form" class="planned-form" onsubmit={on_submit}>
                <DraftFields
                    draft={props.draft.clone()}
                    store={props.store.clone()}
                    on_edit={props.actions.edit.clone()}
                    id_prefix="planned-"
                    date_label="Planned date"
                />
                <div class="form-group form-check">
                    <label for="planned-is-recurring">
                        <input
                            id="planned-is-recurring"
                            type="checkbox"
                            checked={props.draft.is_recurring}
                            onchange={on_recurring}
                        />
                        {" Repeat"}
                    </label>
                </div>
                <div class="form-group" hidden={!props.draft.is_recurring}>
                    <label for="planned-recurrence-pattern">{"Repeats"}</label>
                    <select id="planned-recurrence-pattern" class="form-select" onchange={on_pattern}>
                        <option value="" selected={props.draft.recurrence_pattern.is_empty()}>
                            {"Select interval"}
                        </option>
                        {for RECURRENCE_PATTERNS.iter().map(|(value, label)| html! {
                            <option value={*value} selected={*value == props.draft.recurrence_pattern}>
                                {*label}
                            </option>
                        })}
                    </select>
                </div>
                <button type="submit" class="btn btn-primary">{"Schedule"}</button>
            </form>
        </>
    }
}
