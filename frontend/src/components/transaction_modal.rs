use std::rc::Rc;

use shared::{DataStore, ModalState};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::draft_fields::DraftFields;
use crate::hooks::use_transaction_form::TransactionFormActions;

#[derive(Properties, PartialEq)]
pub struct TransactionModalProps {
    pub modal: ModalState,
    pub store: Rc<DataStore>,
    pub actions: TransactionFormActions,
}

#[function_component(TransactionModal)]
pub fn transaction_modal(props: &TransactionModalProps) -> Html {
    let Some(draft) = props.modal.draft() else {
        return html! {};
    };

    let on_backdrop_click = {
        let close = props.actions.close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let close = props.actions.close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let on_submit = {
        let submit = props.actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div id="transaction-modal" class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"New transaction"}</h3>
                <form id="transaction-form" onsubmit={on_submit}>
                    <DraftFields
                        draft={draft.clone()}
                        store={props.store.clone()}
                        on_edit={props.actions.edit.clone()}
                    />
                    <div class="modal-buttons">
                        <button id="cancel-transaction" type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary">{"Save"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
