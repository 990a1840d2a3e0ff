//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating the complaints
//! table based on the entity definition. The module uses `SeaORM`'s
//! `Schema::create_table_from_entity` method to automatically generate SQL statements from
//! the entity model, ensuring that the database schema matches the Rust struct definitions
//! without requiring manual SQL.

use crate::entities::Complaint;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;

/// Creates the parent directory of a file-backed `SQLite` URL.
///
/// `mode=rwc` lets `SQLite` create the database file on first run, but not its
/// directory; the default URL points into `data/`, which may not exist yet.
/// In-memory and non-`SQLite` URLs pass through untouched.
pub fn prepare_storage_dir(database_url: &str) -> Result<()> {
    let Some(file_part) = database_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let file_path = file_part.split('?').next().unwrap_or(file_part);
    if file_path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Establishes a connection to the `SQLite` database at the given URL.
///
/// The URL normally comes from [`crate::config::AppConfig`], which reads
/// `DATABASE_URL` from the environment. This function handles connection errors
/// and provides a clean interface for database access throughout the application.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the complaints table if it does not exist yet.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct
/// definitions. The statement carries `IF NOT EXISTS`, so calling it on every startup is
/// safe and never clobbers existing rows.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut complaint_table = schema.create_table_from_entity(Complaint);
    complaint_table.if_not_exists();

    db.execute(builder.build(&complaint_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::entities::complaint::{self, ImageMetaList, Model as ComplaintModel};
    use crate::entities::{Complaint, ComplaintStatus};
    use sea_orm::{ActiveModelTrait, EntityTrait, QuerySelect, Set};

    #[test]
    fn test_prepare_storage_dir_skips_memory_and_foreign_urls() -> Result<()> {
        prepare_storage_dir("sqlite::memory:")?;
        prepare_storage_dir("sqlite://:memory:")?;
        prepare_storage_dir("postgres://localhost/complaints")?;
        Ok(())
    }

    #[test]
    fn test_prepare_storage_dir_creates_parent() -> Result<()> {
        let dir = std::env::temp_dir().join(format!("complaint-box-test-{}", std::process::id()));
        let url = format!("sqlite://{}/complaints.sqlite?mode=rwc", dir.display());

        prepare_storage_dir(&url)?;
        assert!(dir.is_dir());
        // Idempotent on an existing directory
        prepare_storage_dir(&url)?;

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_connection_in_memory() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        ensure_schema(&db).await?;

        // Test that we can execute a query to verify the connection is working
        let _: Vec<ComplaintModel> = Complaint::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        ensure_schema(&db).await?;
        ensure_schema(&db).await?;

        let _: Vec<ComplaintModel> = Complaint::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_schema_tolerates_concurrent_cold_start() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;

        // Two racing first-requests must both succeed, not crash on the
        // redundant create
        let (first, second) = tokio::join!(ensure_schema(&db), ensure_schema(&db));
        first?;
        second?;

        let tables = db
            .query_all(sea_orm::Statement::from_string(
                db.get_database_backend(),
                "SELECT name FROM sqlite_master WHERE type='table' AND name='complaints'"
                    .to_string(),
            ))
            .await?;
        assert_eq!(tables.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_schema_preserves_existing_rows() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        ensure_schema(&db).await?;

        let row = complaint::ActiveModel {
            id: Set("row-1".to_string()),
            main_category: Set("存在欺诈骗钱行为".to_string()),
            sub_category: Set("返利诈骗".to_string()),
            contact: Set("user@example.com".to_string()),
            content: Set("测试内容".to_string()),
            images: Set(ImageMetaList::default()),
            status: Set(ComplaintStatus::Pending),
            created_at: Set(chrono::Utc::now()),
        };
        row.insert(&db).await?;

        // Running schema creation again must not drop the table
        ensure_schema(&db).await?;

        let rows = Complaint::find().all(&db).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "row-1");
        Ok(())
    }
}
