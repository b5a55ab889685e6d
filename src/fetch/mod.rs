//! Asynchronous entity fetching.
//!
//! The UI thread never touches the network. The [`Loader`] marks a store
//! pending and queues a command; the worker resolves it against the REST
//! client on the tokio runtime and completes the store through the load
//! ticket it was handed.

mod worker;

pub use worker::run_fetch_worker;

use tokio::sync::mpsc;
use tracing::warn;

use crate::model::EntityId;
use crate::route::Route;
use crate::store::{LoadError, LoadTicket, Stores};

/// One fetch to perform, carrying the write permit for its store.
#[derive(Debug)]
pub enum FetchCommand {
    BookDetail { id: EntityId, ticket: LoadTicket },
    AuthorDetail { id: EntityId, ticket: LoadTicket },
    BookList { ticket: LoadTicket },
    AuthorList { ticket: LoadTicket },
}

/// Write-side handle over the store set.
///
/// All lifecycle transitions funnel through here: screens call
/// [`Loader::mount`] and [`Loader::unmount`], and the worker applies the
/// terminal transitions via the tickets minted here.
#[derive(Clone)]
pub struct Loader {
    stores: Stores,
    commands: mpsc::Sender<FetchCommand>,
}

impl Loader {
    pub fn new(stores: Stores, commands: mpsc::Sender<FetchCommand>) -> Self {
        Self { stores, commands }
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    /// Fetch one book. The detail store goes pending before this call
    /// returns; the terminal transition lands when the response settles.
    pub fn load_book(&self, id: EntityId) {
        let ticket = self.stores.book_detail.begin_load();
        self.dispatch(FetchCommand::BookDetail { id, ticket });
    }

    /// Fetch one author, with the same contract as [`Loader::load_book`].
    pub fn load_author(&self, id: EntityId) {
        let ticket = self.stores.author_detail.begin_load();
        self.dispatch(FetchCommand::AuthorDetail { id, ticket });
    }

    pub fn load_book_list(&self) {
        let ticket = self.stores.book_list.begin_load();
        self.dispatch(FetchCommand::BookList { ticket });
    }

    pub fn load_author_list(&self) {
        let ticket = self.stores.author_list.begin_load();
        self.dispatch(FetchCommand::AuthorList { ticket });
    }

    /// Mount protocol: issue the single load a route needs on entry.
    pub fn mount(&self, route: Route) {
        match route {
            Route::BookList => self.load_book_list(),
            Route::BookDetail(id) | Route::BookEdit(id) => self.load_book(id),
            Route::AuthorList => self.load_author_list(),
            Route::AuthorDetail(id) | Route::AuthorEdit(id) => self.load_author(id),
        }
    }

    /// Unmount protocol: clear the store the route was reading and
    /// invalidate any in-flight ticket for it.
    pub fn unmount(&self, route: Route) {
        match route {
            Route::BookList => self.stores.book_list.reset(),
            Route::BookDetail(_) | Route::BookEdit(_) => self.stores.book_detail.reset(),
            Route::AuthorList => self.stores.author_list.reset(),
            Route::AuthorDetail(_) | Route::AuthorEdit(_) => self.stores.author_detail.reset(),
        }
    }

    /// Queue a command for the worker. A load must never dangle in
    /// pending, so an unavailable queue fails the store on the spot.
    fn dispatch(&self, command: FetchCommand) {
        if let Err(unsent) = self.commands.try_send(command) {
            warn!("fetch queue unavailable, failing load immediately");
            let error = LoadError::new("fetch queue unavailable");
            match unsent.into_inner() {
                FetchCommand::BookDetail { ticket, .. } => {
                    self.stores.book_detail.complete(ticket, Err(error));
                }
                FetchCommand::AuthorDetail { ticket, .. } => {
                    self.stores.author_detail.complete(ticket, Err(error));
                }
                FetchCommand::BookList { ticket } => {
                    self.stores.book_list.complete(ticket, Err(error));
                }
                FetchCommand::AuthorList { ticket } => {
                    self.stores.author_list.complete(ticket, Err(error));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LoadStatus;

    fn loader_with_channel(capacity: usize) -> (Loader, mpsc::Receiver<FetchCommand>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Loader::new(Stores::new(), tx), rx)
    }

    #[test]
    fn load_book_goes_pending_and_queues_a_command() {
        let (loader, mut rx) = loader_with_channel(4);
        loader.load_book(EntityId::new(42));

        assert_eq!(loader.stores().book_detail.status(), LoadStatus::Pending);
        match rx.try_recv() {
            Ok(FetchCommand::BookDetail { id, .. }) => assert_eq!(id, EntityId::new(42)),
            other => panic!("expected book detail command, got {other:?}"),
        }
    }

    #[test]
    fn closed_queue_fails_the_load_immediately() {
        let (loader, rx) = loader_with_channel(4);
        drop(rx);

        loader.load_book(EntityId::new(1));
        match loader.stores().book_detail.status() {
            LoadStatus::Failed(error) => assert_eq!(error.message(), "fetch queue unavailable"),
            other => panic!("expected failed status, got {other:?}"),
        }
    }

    #[test]
    fn unmount_resets_store_and_invalidates_ticket() {
        let (loader, mut rx) = loader_with_channel(4);
        loader.load_book(EntityId::new(42));
        let ticket = match rx.try_recv() {
            Ok(FetchCommand::BookDetail { ticket, .. }) => ticket,
            other => panic!("expected book detail command, got {other:?}"),
        };

        loader.unmount(Route::BookDetail(EntityId::new(42)));
        assert_eq!(loader.stores().book_detail.status(), LoadStatus::Idle);
        assert!(!loader
            .stores()
            .book_detail
            .complete(ticket, Err(LoadError::new("late"))));
        assert_eq!(loader.stores().book_detail.status(), LoadStatus::Idle);
    }

    #[test]
    fn mounting_an_edit_route_loads_the_entity() {
        let (loader, mut rx) = loader_with_channel(4);
        loader.mount(Route::AuthorEdit(EntityId::new(7)));

        assert_eq!(loader.stores().author_detail.status(), LoadStatus::Pending);
        match rx.try_recv() {
            Ok(FetchCommand::AuthorDetail { id, .. }) => assert_eq!(id, EntityId::new(7)),
            other => panic!("expected author detail command, got {other:?}"),
        }
    }

    #[test]
    fn mounting_a_list_route_loads_the_collection() {
        let (loader, mut rx) = loader_with_channel(4);
        loader.mount(Route::BookList);

        assert_eq!(loader.stores().book_list.status(), LoadStatus::Pending);
        assert!(matches!(rx.try_recv(), Ok(FetchCommand::BookList { .. })));
    }
}
