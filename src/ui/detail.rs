//! Read-only projection of a loaded entity into labeled field rows.
//!
//! Projection is pure: the rows are a function of the entity and the
//! date format alone, so rendering the same state twice yields the same
//! rows. With no entity in the store every value is a placeholder dash;
//! with an entity, fields the backend left null render as empty strings.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Author, AuthorRef, Book};
use crate::route::EntityKind;
use crate::ui::format::DateFormatter;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, LABEL_TEXT, PLACEHOLDER_TEXT};

/// Placeholder shown for every field while no entity is loaded.
pub const EMPTY_FIELD: &str = "—";

pub const BOOK_FIELD_LABELS: [&str; 6] = [
    "ID",
    "Title",
    "Description",
    "Publication Date",
    "Price",
    "Author",
];

pub const AUTHOR_FIELD_LABELS: [&str; 3] = ["ID", "Name", "Birth Date"];

/// One labeled field of a detail or edit screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    pub label: &'static str,
    pub value: String,
}

/// Project a book into its field rows.
pub fn book_rows(book: Option<&Book>, dates: &DateFormatter) -> Vec<FieldRow> {
    let Some(book) = book else {
        return placeholder_rows(&BOOK_FIELD_LABELS);
    };
    vec![
        row(BOOK_FIELD_LABELS[0], book.id.to_string()),
        row(BOOK_FIELD_LABELS[1], book.title.clone().unwrap_or_default()),
        row(
            BOOK_FIELD_LABELS[2],
            book.description.clone().unwrap_or_default(),
        ),
        row(BOOK_FIELD_LABELS[3], dates.format(book.publication_date)),
        row(
            BOOK_FIELD_LABELS[4],
            book.price.map(|price| price.to_string()).unwrap_or_default(),
        ),
        row(BOOK_FIELD_LABELS[5], author_ref_value(&book.author)),
    ]
}

/// Project an author into its field rows.
pub fn author_rows(author: Option<&Author>, dates: &DateFormatter) -> Vec<FieldRow> {
    let Some(author) = author else {
        return placeholder_rows(&AUTHOR_FIELD_LABELS);
    };
    vec![
        row(AUTHOR_FIELD_LABELS[0], author.id.to_string()),
        row(
            AUTHOR_FIELD_LABELS[1],
            author.name.clone().unwrap_or_default(),
        ),
        row(AUTHOR_FIELD_LABELS[2], dates.format(author.birth_date)),
    ]
}

pub fn field_count(kind: EntityKind) -> usize {
    match kind {
        EntityKind::Book => BOOK_FIELD_LABELS.len(),
        EntityKind::Author => AUTHOR_FIELD_LABELS.len(),
    }
}

/// The referenced author renders as its identifier whether or not a
/// snapshot is embedded.
fn author_ref_value(author: &AuthorRef) -> String {
    author.id().map(|id| id.to_string()).unwrap_or_default()
}

fn placeholder_rows(labels: &[&'static str]) -> Vec<FieldRow> {
    labels
        .iter()
        .map(|label| row(label, EMPTY_FIELD.to_string()))
        .collect()
}

fn row(label: &'static str, value: String) -> FieldRow {
    FieldRow { label, value }
}

/// Widget for the detail body: a label column and a value column.
pub fn detail_widget(title: String, rows: &[FieldRow]) -> Paragraph<'static> {
    let label_width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(Line::from(""));
    for row in rows {
        let value_style = if row.value == EMPTY_FIELD {
            Style::default().fg(PLACEHOLDER_TEXT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{:<width$}", row.label, width = label_width),
                Style::default().fg(LABEL_TEXT),
            ),
            Span::raw("   "),
            Span::styled(row.value.clone(), value_style),
        ]));
    }

    Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
