use shared::{AppConfig, NavState, Section};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::dashboard::Dashboard;
use components::header::Header;
use components::planned_section::PlannedSection;
use components::reports_panel::ReportsPanel;
use components::settings_panel::SettingsPanel;
use components::transaction_list::TransactionList;
use components::transaction_modal::TransactionModal;
use hooks::use_bootstrap::use_bootstrap;
use hooks::use_data_store::use_data_store;
use hooks::use_planned::use_planned;
use hooks::use_reports::use_reports;
use hooks::use_settings::use_settings;
use hooks::use_transaction_form::use_transaction_form;
use services::api::ApiClient;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = use_memo(props.config.api_base.clone(), |base| {
        ApiClient::with_base_url(base.clone())
    });
    let nav = use_state(NavState::default);

    let store = use_data_store(&api_client);
    let snapshot = store.snapshot.clone();
    let transaction_form = use_transaction_form(&api_client, &store.loader);
    let planned = use_planned(&api_client, &store.loader);
    let reports = use_reports(&api_client);
    let settings = use_settings(&api_client, &store.loader);

    let on_navigate = {
        let nav = nav.clone();
        Callback::from(move |section: Section| {
            log::debug!("Showing {}", section.name());
            nav.set(nav.show(section));
        })
    };

    let on_ready = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Section::Dashboard))
    };
    use_bootstrap(&api_client, &store.loader, props.config.seed_test_data, on_ready);

    let section = |target: Section, body: Html| -> Html {
        html! {
            <section id={target.container_id()} class="section" hidden={!nav.is_visible(target)}>
                <h2 class="section-title">{target.title()}</h2>
                {body}
            </section>
        }
    };

    html! {
        <>
            <Header
                nav={*nav}
                on_navigate={on_navigate}
                on_add_transaction={transaction_form.actions.open.clone()}
            />

            <main class="main">
                <div class="container">
                    {if *nav == NavState::Booting {
                        html! { <div class="loading">{"Loading..."}</div> }
                    } else {
                        html! {}
                    }}

                    {section(Section::Dashboard, html! {
                        <Dashboard
                            store={snapshot.clone()}
                            recent_limit={props.config.recent_transactions_limit}
                        />
                    })}

                    {section(Section::Transactions, html! {
                        <TransactionList
                            id="transactions-list"
                            rows={shared::view::transaction_rows(&snapshot.transactions)}
                        />
                    })}

                    {section(Section::Planned, html! {
                        <PlannedSection
                            store={snapshot.clone()}
                            draft={planned.draft.clone()}
                            actions={planned.actions.clone()}
                        />
                    })}

                    {section(Section::Reports, html! {
                        <ReportsPanel state={reports.state.clone()} actions={reports.actions.clone()} />
                    })}

                    {section(Section::Settings, html! {
                        <SettingsPanel store={snapshot.clone()} actions={settings.clone()} />
                    })}
                </div>
            </main>

            <TransactionModal
                modal={transaction_form.modal.clone()}
                store={snapshot.clone()}
                actions={transaction_form.actions.clone()}
            />
        </>
    }
}

fn main() {
    let config = services::config::load_config();
    services::logging::init(config.level_filter());
    log::info!("Starting finance tracker against {}", config.api_base);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
