//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod complaint;

// Re-export specific types to avoid conflicts
pub use complaint::{
    ComplaintStatus, Entity as Complaint, ImageMeta, ImageMetaList, Model as ComplaintModel,
};
