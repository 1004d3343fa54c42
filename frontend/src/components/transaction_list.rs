use shared::view::TransactionRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub id: AttrValue,
    pub rows: Vec<TransactionRow>,
    /// Compact rows leave out the account line and description
    #[prop_or(false)]
    pub compact: bool,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    if props.rows.is_empty() {
        return html! {
            <ul id={props.id.clone()} class="transaction-list">
                <li class="empty-state">{"No transactions yet"}</li>
            </ul>
        };
    }

    html! {
        <ul id={props.id.clone()} class="transaction-list">
            {for props.rows.iter().map(|row| {
                html! {
                    <li key={row.id} class={classes!("transaction-item", row.row_class)}>
                        <div class="transaction-main">
                            <p class="transaction-type">{&row.type_label}</p>
                            <p class="transaction-category">{&row.category}</p>
                            {if props.compact {
                                html! {}
                            } else {
                                html! {
                                    <>
                                        <p class="transaction-accounts">{&row.accounts}</p>
                                        {for row.description.iter().map(|description| html! {
                                            <p class="transaction-description">{description}</p>
                                        })}
                                    </>
                                }
                            }}
                        </div>
                        <div class="transaction-side">
                            <p class="transaction-amount">{&row.amount}</p>
                            <p class="transaction-date">{&row.date}</p>
                        </div>
                    </li>
                }
            })}
        </ul>
    }
}
