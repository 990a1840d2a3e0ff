//! Application settings loaded from the environment.
//!
//! Everything the server needs at startup lives in [`AppConfig`]: the bind
//! address, the database URL, the admin credentials, and the category catalog.
//! Each value has a development default so `cargo run` works out of the box,
//! but the credential defaults are loudly warned about.

use crate::config::categories::{self, CategoryCatalog};
use crate::errors::Result;
use tracing::warn;

/// Default listen address when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8787";

/// Default `SQLite` location when `DATABASE_URL` is not set. `mode=rwc`
/// creates the file on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/complaints.sqlite?mode=rwc";

const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_SESSION_SECRET: &str = "complaint-box-dev-secret";
const DEFAULT_CATEGORY_CONFIG: &str = "categories.toml";

/// Runtime configuration assembled from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server listens on (`BIND_ADDR`)
    pub bind_addr: String,
    /// `SeaORM` connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Password the admin dashboard login checks against (`ADMIN_PASSWORD`)
    pub admin_password: String,
    /// Secret used to sign admin session tokens (`SESSION_SECRET`)
    pub session_secret: String,
    /// Category tree served to the intake wizard (`CATEGORY_CONFIG`)
    pub categories: CategoryCatalog,
}

impl AppConfig {
    /// Assembles the configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error if `CATEGORY_CONFIG` points at a file that exists but
    /// cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let bind_addr = env_or("BIND_ADDR", DEFAULT_BIND_ADDR);
        let database_url = env_or("DATABASE_URL", DEFAULT_DATABASE_URL);

        let admin_password = env_or("ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD);
        if admin_password == DEFAULT_ADMIN_PASSWORD {
            warn!("ADMIN_PASSWORD is the built-in default; set it before exposing this server");
        }

        let session_secret = env_or("SESSION_SECRET", DEFAULT_SESSION_SECRET);
        if session_secret == DEFAULT_SESSION_SECRET {
            warn!("SESSION_SECRET is the built-in default; session cookies can be forged");
        }

        let catalog_path = env_or("CATEGORY_CONFIG", DEFAULT_CATEGORY_CONFIG);
        let categories = categories::load_or_default(&catalog_path)?;

        Ok(Self {
            bind_addr,
            database_url,
            admin_password,
            session_secret,
            categories,
        })
    }
}

/// Reads an environment variable, falling back to `default` when unset.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_env_or_uses_default_when_unset() {
        let value = env_or("COMPLAINT_BOX_SURELY_UNSET_VAR", "fallback");
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_load_fills_every_field() {
        let config = AppConfig::load().unwrap();
        assert!(!config.bind_addr.is_empty());
        assert!(!config.database_url.is_empty());
        assert!(!config.admin_password.is_empty());
        assert!(!config.session_secret.is_empty());
        assert_eq!(config.categories.categories.len(), 8);
    }
}
