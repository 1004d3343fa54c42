use serde::{Deserialize, Serialize};

/// Runtime settings for the web client.
///
/// Every field has a default, so a stored override only needs the keys it
/// changes, e.g. `{"seed_test_data": false}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix prepended to every endpoint path
    pub api_base: String,
    /// How many transactions the dashboard's recent list shows
    pub recent_transactions_limit: usize,
    /// Ask the backend to create sample data before the first load
    pub seed_test_data: bool,
    /// `log` level filter name: off, error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            recent_transactions_limit: 5,
            seed_test_data: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parsed log level; unknown names fall back to `Info`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
