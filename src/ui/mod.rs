//! Terminal user interface: event loop, screen state, views.

pub mod app;
pub mod detail;
pub mod edit;
pub mod events;
pub mod footer;
pub mod format;
pub mod header;
pub mod input;
pub mod layout;
pub mod list;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
