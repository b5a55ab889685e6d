use std::sync::mpsc as std_mpsc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError};
use crate::fetch::FetchCommand;
use crate::store::{LoadError, Stores};
use crate::ui::events::AppEvent;

/// Drains fetch commands for the lifetime of the channel, one spawned
/// request per command so a slow response never blocks the queue.
pub async fn run_fetch_worker(
    client: ApiClient,
    stores: Stores,
    mut commands: mpsc::Receiver<FetchCommand>,
    events: std_mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let client = client.clone();
        let stores = stores.clone();
        let events = events.clone();
        tokio::spawn(async move {
            resolve(client, stores, events, command).await;
        });
    }
    debug!("fetch worker stopped: command channel closed");
}

async fn resolve(
    client: ApiClient,
    stores: Stores,
    events: std_mpsc::Sender<AppEvent>,
    command: FetchCommand,
) {
    let (entity, applied) = match command {
        FetchCommand::BookDetail { id, ticket } => {
            debug!(%id, "fetching book");
            let result = to_load(client.book(id).await);
            ("book", stores.book_detail.complete(ticket, result))
        }
        FetchCommand::AuthorDetail { id, ticket } => {
            debug!(%id, "fetching author");
            let result = to_load(client.author(id).await);
            ("author", stores.author_detail.complete(ticket, result))
        }
        FetchCommand::BookList { ticket } => {
            debug!("fetching book list");
            let result = to_load(client.books().await);
            ("book list", stores.book_list.complete(ticket, result))
        }
        FetchCommand::AuthorList { ticket } => {
            debug!("fetching author list");
            let result = to_load(client.authors().await);
            ("author list", stores.author_list.complete(ticket, result))
        }
    };

    if applied {
        // Nudge the event loop so fresh state renders without waiting
        // for the next tick. Send failures mean the UI is gone.
        let _ = events.send(AppEvent::DataChanged);
    } else {
        debug!(entity, "stale response discarded");
    }
}

fn to_load<T>(result: Result<T, ApiError>) -> Result<T, LoadError> {
    result.map_err(|error| {
        warn!(kind = error.kind(), %error, "fetch failed");
        LoadError::from(error)
    })
}
