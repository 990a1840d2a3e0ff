/// Complaint creation, listing, status updates, and deletion
pub mod complaint;
