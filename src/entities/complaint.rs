//! Complaint entity - the single persisted record of the intake system.
//!
//! A complaint is created once by the public submission form and afterwards
//! only its `status` may change (admin action) until the record is deleted.
//! Image uploads are recorded as metadata only; binary content never reaches
//! the server.

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review status of a complaint, stored as a plain string column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ComplaintStatus {
    /// Freshly submitted, nobody has looked at it yet
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    /// An administrator is working on it
    #[sea_orm(string_value = "processing")]
    Processing,
    /// Handled; records are kept until explicitly deleted
    #[sea_orm(string_value = "resolved")]
    Resolved,
}

/// Metadata of one uploaded image. The browser reads `File` objects and sends
/// only these three fields; the bytes themselves are never transmitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMeta {
    /// Original file name as reported by the client
    pub name: String,
    /// File size in bytes
    pub size: i64,
    /// MIME type (e.g., `"image/png"`)
    #[serde(rename = "type")]
    pub content_type: String,
}

/// Ordered list of image metadata, persisted as a single JSON column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, FromJsonQueryResult)]
pub struct ImageMetaList(pub Vec<ImageMeta>);

impl ImageMetaList {
    /// Number of recorded images.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.len()
    }
}

/// Complaint database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "complaints")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Opaque identifier (UUID v4), generated server-side at creation
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Top-level category the user picked (e.g., "存在欺诈骗钱行为")
    pub main_category: String,
    /// Second-level category; empty string when the main category has none
    pub sub_category: String,
    /// How to reach the reporter (free text: phone, email, ...)
    pub contact: String,
    /// Free-text complaint body. The form caps input at 200 characters but
    /// the server stores whatever arrives.
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Metadata of up to nine uploaded images
    pub images: ImageMetaList,
    /// Current review status, mutated only by admin actions
    pub status: ComplaintStatus,
    /// Submission time, set once and never updated
    pub created_at: DateTimeUtc,
}

/// Complaints stand alone; there are no related entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
