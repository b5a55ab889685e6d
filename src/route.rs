//! Typed route table for the client's screens.
//!
//! String forms mirror the backend UI's paths, so deep links read the
//! same: `/book`, `/book/{id}`, `/book/{id}/edit`, and the author
//! analogues.

use std::fmt;

use crate::model::EntityId;

/// Which entity family a screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Book,
    Author,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Book => "Books",
            EntityKind::Author => "Authors",
        }
    }
}

/// One navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    BookList,
    BookDetail(EntityId),
    BookEdit(EntityId),
    AuthorList,
    AuthorDetail(EntityId),
    AuthorEdit(EntityId),
}

impl Route {
    /// Parse a path like `/book/42/edit`.
    ///
    /// A detail or edit route only parses when the id segment is a valid
    /// integer; anything else is rejected rather than guessed at.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim().trim_start_matches('/').trim_end_matches('/');
        let mut segments = trimmed.split('/');

        let kind = match segments.next() {
            Some("book") => EntityKind::Book,
            Some("author") => EntityKind::Author,
            _ => return None,
        };

        let id = match segments.next() {
            None => {
                return Some(match kind {
                    EntityKind::Book => Route::BookList,
                    EntityKind::Author => Route::AuthorList,
                })
            }
            Some(raw) => raw.parse::<EntityId>().ok()?,
        };

        match segments.next() {
            None => Some(match kind {
                EntityKind::Book => Route::BookDetail(id),
                EntityKind::Author => Route::AuthorDetail(id),
            }),
            Some("edit") if segments.next().is_none() => Some(match kind {
                EntityKind::Book => Route::BookEdit(id),
                EntityKind::Author => Route::AuthorEdit(id),
            }),
            Some(_) => None,
        }
    }

    /// Canonical path form, shown in the header breadcrumb.
    pub fn path(&self) -> String {
        match self {
            Route::BookList => "/book".to_string(),
            Route::BookDetail(id) => format!("/book/{id}"),
            Route::BookEdit(id) => format!("/book/{id}/edit"),
            Route::AuthorList => "/author".to_string(),
            Route::AuthorDetail(id) => format!("/author/{id}"),
            Route::AuthorEdit(id) => format!("/author/{id}/edit"),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Route::BookList | Route::BookDetail(_) | Route::BookEdit(_) => EntityKind::Book,
            Route::AuthorList | Route::AuthorDetail(_) | Route::AuthorEdit(_) => EntityKind::Author,
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Route::BookDetail(_) | Route::AuthorDetail(_))
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Route::BookEdit(_) | Route::AuthorEdit(_))
    }

    /// The list route for this route's entity kind; the back target for
    /// detail screens.
    pub fn list_route(&self) -> Route {
        match self.kind() {
            EntityKind::Book => Route::BookList,
            EntityKind::Author => Route::AuthorList,
        }
    }

    /// The edit route behind a detail screen, if this is one.
    pub fn edit_route(&self) -> Option<Route> {
        match self {
            Route::BookDetail(id) => Some(Route::BookEdit(*id)),
            Route::AuthorDetail(id) => Some(Route::AuthorEdit(*id)),
            _ => None,
        }
    }

    /// The detail route an edit screen returns to.
    pub fn detail_route(&self) -> Option<Route> {
        match self {
            Route::BookEdit(id) => Some(Route::BookDetail(*id)),
            Route::AuthorEdit(id) => Some(Route::AuthorDetail(*id)),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_routes() {
        assert_eq!(Route::parse("/book"), Some(Route::BookList));
        assert_eq!(Route::parse("/author"), Some(Route::AuthorList));
        assert_eq!(Route::parse("book"), Some(Route::BookList));
        assert_eq!(Route::parse("/book/"), Some(Route::BookList));
    }

    #[test]
    fn parses_detail_and_edit_routes() {
        assert_eq!(
            Route::parse("/book/42"),
            Some(Route::BookDetail(EntityId::new(42)))
        );
        assert_eq!(
            Route::parse("/book/42/edit"),
            Some(Route::BookEdit(EntityId::new(42)))
        );
        assert_eq!(
            Route::parse("/author/7"),
            Some(Route::AuthorDetail(EntityId::new(7)))
        );
        assert_eq!(
            Route::parse("/author/7/edit"),
            Some(Route::AuthorEdit(EntityId::new(7)))
        );
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("/"), None);
        assert_eq!(Route::parse("/shelf"), None);
        assert_eq!(Route::parse("/book/not-a-number"), None);
        assert_eq!(Route::parse("/book//edit"), None);
        assert_eq!(Route::parse("/book/42/delete"), None);
        assert_eq!(Route::parse("/book/42/edit/extra"), None);
    }

    #[test]
    fn path_and_parse_roundtrip() {
        let routes = [
            Route::BookList,
            Route::BookDetail(EntityId::new(1)),
            Route::BookEdit(EntityId::new(2)),
            Route::AuthorList,
            Route::AuthorDetail(EntityId::new(3)),
            Route::AuthorEdit(EntityId::new(4)),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn navigation_targets_line_up() {
        let detail = Route::BookDetail(EntityId::new(42));
        assert_eq!(detail.list_route(), Route::BookList);
        assert_eq!(detail.edit_route(), Some(Route::BookEdit(EntityId::new(42))));
        assert_eq!(detail.detail_route(), None);

        let edit = Route::AuthorEdit(EntityId::new(7));
        assert_eq!(edit.detail_route(), Some(Route::AuthorDetail(EntityId::new(7))));
        assert_eq!(edit.edit_route(), None);
        assert!(edit.is_edit());
        assert!(!edit.is_detail());
    }
}
