//! Complaint business logic - Handles all complaint-related operations.
//!
//! Provides functions for creating, listing, updating, and deleting complaints.
//! All functions are async and return Result types for error handling.

use crate::{
    entities::{Complaint, ComplaintStatus, ImageMeta, ImageMetaList, complaint},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use uuid::Uuid;

/// Fields supplied by the submission form for a new complaint.
///
/// Everything arrives as free text from the browser; `images` holds metadata
/// only, never file contents.
#[derive(Debug, Clone, Default)]
pub struct NewComplaint {
    /// Top-level category label
    pub main_category: String,
    /// Second-level category label, empty when the category has none
    pub sub_category: String,
    /// Reporter contact (phone, email, ...)
    pub contact: String,
    /// Free-text complaint body
    pub content: String,
    /// Metadata of the attached images
    pub images: Vec<ImageMeta>,
}

/// Creates a new complaint, performing input validation.
///
/// Validates that `main_category`, `contact`, and `content` are non-empty,
/// generates a UUID id, stamps the submission time, and persists the record
/// with status [`ComplaintStatus::Pending`]. Field values are stored exactly
/// as submitted; no trimming or normalization happens anywhere.
pub async fn create_complaint(
    db: &DatabaseConnection,
    new: NewComplaint,
) -> Result<complaint::Model> {
    // Validate inputs
    if new.main_category.is_empty() {
        return Err(Error::Validation {
            message: "mainCategory is required".to_string(),
        });
    }
    if new.contact.is_empty() {
        return Err(Error::Validation {
            message: "contact is required".to_string(),
        });
    }
    if new.content.is_empty() {
        return Err(Error::Validation {
            message: "content is required".to_string(),
        });
    }

    let complaint = complaint::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        main_category: Set(new.main_category),
        sub_category: Set(new.sub_category),
        contact: Set(new.contact),
        content: Set(new.content),
        images: Set(ImageMetaList(new.images)),
        status: Set(ComplaintStatus::Pending),
        created_at: Set(chrono::Utc::now()),
    };

    let result = complaint.insert(db).await?;
    Ok(result)
}

/// Retrieves complaints newest-first, capped at `limit` rows.
///
/// The dashboard and the list API both read through this function; they pass
/// a limit of 100.
pub async fn list_complaints(db: &DatabaseConnection, limit: u64) -> Result<Vec<complaint::Model>> {
    Complaint::find()
        .order_by_desc(complaint::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a complaint by its id, returning None if it does not exist.
pub async fn get_complaint(db: &DatabaseConnection, id: &str) -> Result<Option<complaint::Model>> {
    Complaint::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Sets the status of one complaint by id.
///
/// A missing id surfaces [`Error::ComplaintNotFound`]. Setting the status a
/// record already has succeeds and leaves the row unchanged.
pub async fn update_complaint_status(
    db: &DatabaseConnection,
    id: &str,
    status: ComplaintStatus,
) -> Result<complaint::Model> {
    let complaint = Complaint::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ComplaintNotFound { id: id.to_string() })?;

    let mut complaint: complaint::ActiveModel = complaint.into();
    complaint.status = Set(status);
    complaint.update(db).await.map_err(Into::into)
}

/// Deletes one complaint by id.
///
/// A missing id surfaces [`Error::ComplaintNotFound`].
pub async fn delete_complaint(db: &DatabaseConnection, id: &str) -> Result<()> {
    let complaint = Complaint::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ComplaintNotFound { id: id.to_string() })?;

    complaint.delete(db).await?;
    Ok(())
}
