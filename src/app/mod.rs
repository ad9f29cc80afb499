//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and navigation handling.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use screens::{DetailField, DetailScreen, ListScreen};
pub use state::{Action, NavigationStack, Screen};
pub use tui::Tui;
