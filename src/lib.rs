//! Terminal browser for a book and author REST backend.
//!
//! The crate repeats one pattern per entity kind: an [`store::EntityStore`]
//! cell holding the latest payload and its load status, a [`fetch::Loader`]
//! that marks the cell pending and settles it through the REST client, and
//! views that project whatever the cell holds into labeled fields.

pub mod api;
pub mod config;
pub mod fetch;
pub mod model;
pub mod route;
pub mod store;
pub mod ui;
