/// Application settings loaded from the environment
pub mod app;

/// Complaint category catalog loading from categories.toml
pub mod categories;

/// Database configuration and connection management
pub mod database;

pub use app::AppConfig;
pub use categories::{CategoryCatalog, CategoryConfig};
