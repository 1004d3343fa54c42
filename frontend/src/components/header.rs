use shared::{NavState, Section};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub nav: NavState,
    pub on_navigate: Callback<Section>,
    pub on_add_transaction: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_add = {
        let on_add_transaction = props.on_add_transaction.clone();
        Callback::from(move |_: MouseEvent| on_add_transaction.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Finance Tracker"}</h1>
                <nav class="nav">
                    {for Section::ALL.iter().map(|section| {
                        let section = *section;
                        let onclick = {
                            let on_navigate = props.on_navigate.clone();
                            Callback::from(move |_: MouseEvent| on_navigate.emit(section))
                        };
                        html! {
                            <button
                                id={section.nav_id()}
                                type="button"
                                class={classes!("nav-btn", props.nav.is_active(section).then_some("active"))}
                                {onclick}
                            >
                                {section.title()}
                            </button>
                        }
                    })}
                </nav>
                <button id="add-transaction-btn" type="button" class="btn btn-primary" onclick={on_add}>
                    {"+ Transaction"}
                </button>
            </div>
        </header>
    }
}
