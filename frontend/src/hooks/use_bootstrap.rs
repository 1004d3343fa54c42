use shared::Operation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_data_store::Loader;
use crate::services::api::ApiClient;
use crate::services::notify;

/// First-mount startup: optionally seed the backend, load every slice, then
/// emit `on_ready`. A failed seed is reported but the load still runs.
#[hook]
pub fn use_bootstrap(
    api_client: &ApiClient,
    loader: &Loader,
    seed_test_data: bool,
    on_ready: Callback<()>,
) {
    let api_client = api_client.clone();
    let loader = loader.clone();

    use_effect_with((), move |_| {
        spawn_local(async move {
            if seed_test_data {
                match api_client.init_test_data().await {
                    Ok(response) => {
                        log::info!("Seeded test data: {}", response.message);
                        notify::success(Operation::InitTestData);
                    }
                    Err(e) => notify::failure(Operation::InitTestData, &e),
                }
            }

            loader.load_all().await;
            log::info!("Initial load finished");
            on_ready.emit(());
        });
        || ()
    });
}
