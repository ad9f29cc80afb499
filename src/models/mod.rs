//! Data models module
//!
//! Contains the member record and the row projection the list screen draws.

pub mod member;

// Re-export commonly used types
pub use member::{Member, RowViewModel};
