//! Wire model for the library backend's REST payloads.

mod author;
mod book;
mod id;

pub use author::{Author, AuthorRef};
pub use book::Book;
pub use id::EntityId;
