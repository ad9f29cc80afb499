//! TUI screen components
//!
//! Contains the member list screen and the create/edit detail screen.

pub mod detail;
pub mod list;

pub use detail::{DetailField, DetailScreen};
pub use list::ListScreen;
