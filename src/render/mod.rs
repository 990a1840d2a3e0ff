/// Admin login and dashboard pages
pub mod admin;

/// Shared HTML primitives: escaping, page shell, status labels, stats
pub mod html;

/// Public intake wizard, submission form, and success page
pub mod public;
