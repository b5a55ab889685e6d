//! The blocking UI loop and its wiring to the async fetch side.

use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::info;

use crate::api::ApiClient;
use crate::config::Config;
use crate::fetch::{run_fetch_worker, FetchCommand, Loader};
use crate::route::Route;
use crate::store::Stores;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Commands buffered between the UI thread and the fetch worker.
const FETCH_QUEUE_DEPTH: usize = 32;

pub fn run(config: Config, runtime: Handle, initial_route: Route) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.display.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let stores = Stores::new();
    let (command_tx, command_rx) = tokio::sync::mpsc::channel::<FetchCommand>(FETCH_QUEUE_DEPTH);
    let loader = Loader::new(stores.clone(), command_tx);
    let client = ApiClient::new(&config.server);
    runtime.spawn(run_fetch_worker(
        client,
        stores.clone(),
        command_rx,
        events.sender(),
    ));

    let mut app = App::new(&config, stores, loader);
    app.navigate(initial_route);
    info!(route = %initial_route, "ui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {
                // terminal.draw picks up the new size on the next pass
            }
            Ok(AppEvent::DataChanged) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    info!("ui stopped");
    Ok(())
}
