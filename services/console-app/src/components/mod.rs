//! Dashboard view components

pub mod service_table;
pub mod status_badge;
pub mod user_table;
