use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use shared::AppConfig;

/// Local storage key holding a JSON object of `AppConfig` overrides
pub const CONFIG_KEY: &str = "finance-tracker:config";

/// Stored overrides on top of the defaults. Runs before the logger is
/// installed, so problems go straight to the console.
pub fn load_config() -> AppConfig {
    match LocalStorage::get::<AppConfig>(CONFIG_KEY) {
        Ok(config) => config,
        Err(StorageError::KeyNotFound(_)) => AppConfig::default(),
        Err(e) => {
            gloo::console::warn!(format!("Ignoring stored config {}: {}", CONFIG_KEY, e));
            AppConfig::default()
        }
    }
}
