//! Per-entity load state.
//!
//! Each store is one shared cell holding the most recently loaded value
//! and its load status. Writers go through load tickets so a response
//! that outlives its mount is discarded instead of clobbering whatever
//! the next mount put in the cell.

use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::model::{Author, Book};

/// Lifecycle state of an asynchronous fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    /// No request has been issued for the current mount.
    #[default]
    Idle,
    /// A request is outstanding.
    Pending,
    /// The last request resolved with a payload.
    Succeeded,
    /// The last request failed; views treat the descriptor as opaque.
    Failed(LoadError),
}

impl LoadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadStatus::Pending)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, LoadStatus::Succeeded)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadStatus::Failed(_))
    }
}

/// Failure descriptor stored alongside a failed load.
///
/// Every error the fetch path can produce collapses into this one shape;
/// the message exists for the status line and the logs, not for
/// branching.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Write permit for one load request.
///
/// Issued by [`EntityStore::begin_load`]; the matching
/// [`EntityStore::complete`] call applies only if no newer load or reset
/// has taken over the cell since.
#[derive(Debug)]
pub struct LoadTicket {
    generation: u64,
}

struct StoreInner<T> {
    entity: Option<T>,
    status: LoadStatus,
    generation: u64,
}

/// One shared cell per entity kind.
///
/// Render passes and tests read through cheap clones; all writes funnel
/// through the loader, which is the single writer by convention.
pub struct EntityStore<T> {
    inner: Arc<RwLock<StoreInner<T>>>,
}

impl<T> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                entity: None,
                status: LoadStatus::Idle,
                generation: 0,
            })),
        }
    }

    /// Start a load: discard the previous entity, mark the cell pending,
    /// and hand out the write permit for the eventual completion.
    pub fn begin_load(&self) -> LoadTicket {
        let mut inner = self.inner.write().expect("entity store lock poisoned");
        inner.generation += 1;
        inner.entity = None;
        inner.status = LoadStatus::Pending;
        LoadTicket {
            generation: inner.generation,
        }
    }

    /// Apply the terminal transition for `ticket`.
    ///
    /// Returns false when the ticket is stale, meaning a newer load or a
    /// reset took over the cell; the result is dropped in that case.
    pub fn complete(&self, ticket: LoadTicket, result: Result<T, LoadError>) -> bool {
        let mut inner = self.inner.write().expect("entity store lock poisoned");
        if inner.generation != ticket.generation {
            return false;
        }
        match result {
            Ok(entity) => {
                inner.entity = Some(entity);
                inner.status = LoadStatus::Succeeded;
            }
            Err(error) => {
                inner.entity = None;
                inner.status = LoadStatus::Failed(error);
            }
        }
        true
    }

    /// Clear the cell on unmount. Bumps the generation so an in-flight
    /// response for the dead mount can never write.
    pub fn reset(&self) {
        let mut inner = self.inner.write().expect("entity store lock poisoned");
        inner.generation += 1;
        inner.entity = None;
        inner.status = LoadStatus::Idle;
    }

    /// Current entity, if the last load succeeded.
    pub fn entity(&self) -> Option<T> {
        self.inner
            .read()
            .expect("entity store lock poisoned")
            .entity
            .clone()
    }

    /// Current load status.
    pub fn status(&self) -> LoadStatus {
        self.inner
            .read()
            .expect("entity store lock poisoned")
            .status
            .clone()
    }

    /// Entity and status read under one lock, for render passes that
    /// need a consistent pair.
    pub fn snapshot(&self) -> (Option<T>, LoadStatus) {
        let inner = self.inner.read().expect("entity store lock poisoned");
        (inner.entity.clone(), inner.status.clone())
    }
}

impl<T: Clone> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The full store set, one cell per entity kind and view flavor.
///
/// Detail cells hold single records, list cells hold whole collections;
/// all four share the same lifecycle.
#[derive(Clone, Default)]
pub struct Stores {
    pub book_detail: EntityStore<Book>,
    pub author_detail: EntityStore<Author>,
    pub book_list: EntityStore<Vec<Book>>,
    pub author_list: EntityStore<Vec<Author>>,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }
}
