pub mod business;
mod config;
mod logging;

pub use business::{BusinessCatalog, BusinessProfile, Product};
pub use config::{AppConfig, LlmProvider};
pub use logging::init_tracing;
