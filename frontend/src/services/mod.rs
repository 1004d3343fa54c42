pub mod api;
pub mod clock;
pub mod config;
pub mod logging;
pub mod notify;
