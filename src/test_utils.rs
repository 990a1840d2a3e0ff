//! Shared test utilities for the complaint box.
//!
//! This module provides common helper functions for setting up test databases,
//! building test configurations, and creating complaints with sensible defaults.

use crate::{
    config::{AppConfig, categories},
    core::complaint::{self, NewComplaint},
    entities,
    errors::Result,
    http,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Creates an in-memory `SQLite` database with the complaints table initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::ensure_schema(&db).await?;
    Ok(db)
}

/// Builds an [`AppConfig`] with fixed test credentials and the built-in
/// category catalog. No environment variables are consulted.
#[must_use]
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        database_url: "sqlite::memory:".to_string(),
        admin_password: "test-password".to_string(),
        session_secret: "test-secret".to_string(),
        categories: categories::default_catalog(),
    }
}

/// Sets up a complete HTTP test environment.
/// Returns (router, db) so tests can drive requests and inspect rows directly.
pub async fn setup_test_app() -> Result<(axum::Router, DatabaseConnection)> {
    let db = setup_test_db().await?;
    let state = http::AppState {
        db: db.clone(),
        config: Arc::new(test_config()),
    };
    Ok((http::router(state), db))
}

/// Creates a test complaint with sensible defaults.
///
/// # Defaults
/// * `main_category`: "存在欺诈骗钱行为"
/// * `sub_category`: "返利诈骗"
/// * `contact`: "test@example.com"
/// * `content`: "描述"
/// * `images`: empty
pub async fn create_test_complaint(
    db: &DatabaseConnection,
) -> Result<entities::complaint::Model> {
    complaint::create_complaint(
        db,
        NewComplaint {
            main_category: "存在欺诈骗钱行为".to_string(),
            sub_category: "返利诈骗".to_string(),
            contact: "test@example.com".to_string(),
            content: "描述".to_string(),
            images: vec![],
        },
    )
    .await
}

/// Creates a test complaint with custom categories and content.
/// Use this when a test needs distinguishable rows.
pub async fn create_custom_complaint(
    db: &DatabaseConnection,
    main_category: &str,
    sub_category: &str,
    content: &str,
) -> Result<entities::complaint::Model> {
    complaint::create_complaint(
        db,
        NewComplaint {
            main_category: main_category.to_string(),
            sub_category: sub_category.to_string(),
            contact: "test@example.com".to_string(),
            content: content.to_string(),
            images: vec![],
        },
    )
    .await
}
