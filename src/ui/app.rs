//! Screen state and navigation.
//!
//! `App` owns the current route and drives the mount protocol: entering
//! a screen resets the store the previous screen was reading and issues
//! exactly one load for the new one. Views themselves stay pure; they
//! only project what the stores hold at draw time.

use tracing::debug;

use crate::config::Config;
use crate::fetch::Loader;
use crate::model::EntityId;
use crate::route::{EntityKind, Route};
use crate::store::{LoadStatus, Stores};
use crate::ui::detail;
use crate::ui::format::DateFormatter;

pub struct App {
    route: Route,
    stores: Stores,
    loader: Loader,
    formatter: DateFormatter,
    server_label: String,
    should_quit: bool,
    book_selection: usize,
    author_selection: usize,
    edit_focus: usize,
    spinner_frame: usize,
}

impl App {
    /// Builds the shell without mounting anything; the caller navigates
    /// to the initial route once the event loop is ready.
    pub fn new(config: &Config, stores: Stores, loader: Loader) -> Self {
        Self {
            route: Route::BookList,
            stores,
            loader,
            formatter: DateFormatter::new(config.display.date_format.clone()),
            server_label: config.server.base_url.clone(),
            should_quit: false,
            book_selection: 0,
            author_selection: 0,
            edit_focus: 0,
            spinner_frame: 0,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    pub fn formatter(&self) -> &DateFormatter {
        &self.formatter
    }

    pub fn server_label(&self) -> &str {
        &self.server_label
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Leave the current screen and enter `route`.
    ///
    /// Unmounting first means a response still in flight for the old
    /// screen can never clobber the new one.
    pub fn navigate(&mut self, route: Route) {
        debug!(from = %self.route, to = %route, "navigate");
        self.loader.unmount(self.route);
        self.route = route;
        self.edit_focus = 0;
        self.loader.mount(route);
    }

    /// Re-issue the load for the current screen.
    pub fn refresh(&mut self) {
        self.loader.mount(self.route);
    }

    /// Back target: detail returns to its list, edit returns to its
    /// detail. Lists have nowhere further back to go.
    pub fn go_back(&mut self) {
        if let Some(detail) = self.route.detail_route() {
            self.navigate(detail);
            return;
        }
        if self.route.is_detail() {
            self.navigate(self.route.list_route());
        }
    }

    /// Edit action on a detail screen.
    pub fn open_edit(&mut self) {
        if let Some(edit) = self.route.edit_route() {
            self.navigate(edit);
        }
    }

    /// Switch to the list screen of `kind`, unless already there.
    pub fn switch_kind(&mut self, kind: EntityKind) {
        let target = match kind {
            EntityKind::Book => Route::BookList,
            EntityKind::Author => Route::AuthorList,
        };
        if self.route != target {
            self.navigate(target);
        }
    }

    /// Open the detail screen for the selected list entry.
    pub fn open_selected(&mut self) {
        match self.route {
            Route::BookList => {
                if let Some(id) = self.selected_book_id() {
                    self.navigate(Route::BookDetail(id));
                }
            }
            Route::AuthorList => {
                if let Some(id) = self.selected_author_id() {
                    self.navigate(Route::AuthorDetail(id));
                }
            }
            _ => {}
        }
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.active_list_len();
        if len == 0 {
            return;
        }
        let slot = match self.route.kind() {
            EntityKind::Book => &mut self.book_selection,
            EntityKind::Author => &mut self.author_selection,
        };
        let current = (*slot).min(len - 1) as i32;
        let next = (current + delta).rem_euclid(len as i32);
        *slot = next as usize;
    }

    pub fn selection(&self) -> usize {
        let len = self.active_list_len();
        let slot = match self.route.kind() {
            EntityKind::Book => self.book_selection,
            EntityKind::Author => self.author_selection,
        };
        if len == 0 {
            0
        } else {
            slot.min(len - 1)
        }
    }

    pub fn move_edit_focus(&mut self, delta: i32) {
        let fields = detail::field_count(self.route.kind()) as i32;
        self.edit_focus = (self.edit_focus as i32 + delta).rem_euclid(fields) as usize;
    }

    pub fn edit_focus(&self) -> usize {
        self.edit_focus
    }

    /// Status of the store the current screen is reading.
    pub fn active_status(&self) -> LoadStatus {
        match self.route {
            Route::BookList => self.stores.book_list.status(),
            Route::BookDetail(_) | Route::BookEdit(_) => self.stores.book_detail.status(),
            Route::AuthorList => self.stores.author_list.status(),
            Route::AuthorDetail(_) | Route::AuthorEdit(_) => self.stores.author_detail.status(),
        }
    }

    pub fn on_tick(&mut self) {
        if self.active_status().is_pending() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    fn active_list_len(&self) -> usize {
        match self.route.kind() {
            EntityKind::Book => self
                .stores
                .book_list
                .entity()
                .map(|books| books.len())
                .unwrap_or(0),
            EntityKind::Author => self
                .stores
                .author_list
                .entity()
                .map(|authors| authors.len())
                .unwrap_or(0),
        }
    }

    fn selected_book_id(&self) -> Option<EntityId> {
        let books = self.stores.book_list.entity()?;
        books.get(self.selection()).map(|book| book.id)
    }

    fn selected_author_id(&self) -> Option<EntityId> {
        let authors = self.stores.author_list.entity()?;
        authors.get(self.selection()).map(|author| author.id)
    }
}
