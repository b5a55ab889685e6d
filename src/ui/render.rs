use ratatui::Frame;

use crate::route::Route;
use crate::ui::app::App;
use crate::ui::detail;
use crate::ui::edit;
use crate::ui::footer::{hints_for, Footer};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header_area, body_area, footer_area) = layout_regions(frame.area());
    let route = app.route();

    let header = Header::new();
    frame.render_widget(
        header.widget(route.kind(), &route.path(), app.server_label()),
        header_area,
    );

    match route {
        Route::BookList => {
            let (books, status) = app.stores().book_list.snapshot();
            let rows = list::book_list_rows(books.as_deref().unwrap_or(&[]), app.formatter());
            frame.render_widget(
                list::list_widget(
                    "Books".to_string(),
                    &list::BOOK_COLUMNS,
                    &rows,
                    app.selection(),
                    &status,
                ),
                body_area,
            );
        }
        Route::AuthorList => {
            let (authors, status) = app.stores().author_list.snapshot();
            let rows = list::author_list_rows(authors.as_deref().unwrap_or(&[]), app.formatter());
            frame.render_widget(
                list::list_widget(
                    "Authors".to_string(),
                    &list::AUTHOR_COLUMNS,
                    &rows,
                    app.selection(),
                    &status,
                ),
                body_area,
            );
        }
        Route::BookDetail(id) => {
            let book = app.stores().book_detail.entity();
            let rows = detail::book_rows(book.as_ref(), app.formatter());
            frame.render_widget(
                detail::detail_widget(format!("Book {id}"), &rows),
                body_area,
            );
        }
        Route::AuthorDetail(id) => {
            let author = app.stores().author_detail.entity();
            let rows = detail::author_rows(author.as_ref(), app.formatter());
            frame.render_widget(
                detail::detail_widget(format!("Author {id}"), &rows),
                body_area,
            );
        }
        Route::BookEdit(id) => {
            let book = app.stores().book_detail.entity();
            let rows = detail::book_rows(book.as_ref(), app.formatter());
            frame.render_widget(
                edit::edit_widget(format!("Edit Book {id}"), &rows, app.edit_focus()),
                body_area,
            );
        }
        Route::AuthorEdit(id) => {
            let author = app.stores().author_detail.entity();
            let rows = detail::author_rows(author.as_ref(), app.formatter());
            frame.render_widget(
                edit::edit_widget(format!("Edit Author {id}"), &rows, app.edit_focus()),
                body_area,
            );
        }
    }

    let footer = Footer::new();
    frame.render_widget(
        footer.widget(
            footer_area,
            &app.active_status(),
            app.spinner_frame(),
            hints_for(&route),
        ),
        footer_area,
    );
}
