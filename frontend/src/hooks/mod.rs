pub mod use_bootstrap;
pub mod use_data_store;
pub mod use_planned;
pub mod use_reports;
pub mod use_settings;
pub mod use_transaction_form;
