//! CLI command handlers.

mod config_path;
mod details;

pub use config_path::run_config_path;
pub use details::run_details;
