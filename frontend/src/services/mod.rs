pub mod api;
pub mod config;
pub mod expense_cache;
pub mod logging;

pub use api::ApiClient;
pub use config::AppConfig;
pub use expense_cache::ExpenseCache;
pub use logging::Logger;
