//! Selectable entity tables for the list screens.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Author, Book};
use crate::store::LoadStatus;
use crate::ui::format::DateFormatter;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, LABEL_TEXT, PLACEHOLDER_TEXT,
};

pub const BOOK_COLUMNS: [&str; 4] = ["ID", "Title", "Published", "Price"];
pub const AUTHOR_COLUMNS: [&str; 3] = ["ID", "Name", "Born"];

/// One table row, already projected to display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub columns: Vec<String>,
}

pub fn book_list_rows(books: &[Book], dates: &DateFormatter) -> Vec<ListRow> {
    books
        .iter()
        .map(|book| ListRow {
            columns: vec![
                book.id.to_string(),
                book.title.clone().unwrap_or_default(),
                dates.format(book.publication_date),
                book.price
                    .map(|price| format!("{price:.2}"))
                    .unwrap_or_default(),
            ],
        })
        .collect()
}

pub fn author_list_rows(authors: &[Author], dates: &DateFormatter) -> Vec<ListRow> {
    authors
        .iter()
        .map(|author| ListRow {
            columns: vec![
                author.id.to_string(),
                author.name.clone().unwrap_or_default(),
                dates.format(author.birth_date),
            ],
        })
        .collect()
}

/// Column widths sized to the wider of header and cells.
fn column_widths(columns: &[&str], rows: &[ListRow]) -> Vec<usize> {
    let mut widths: Vec<usize> = columns.iter().map(|column| column.chars().count()).collect();
    for row in rows {
        for (index, cell) in row.columns.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }
    widths
}

fn table_line(cells: &[String], widths: &[usize], style: Style) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (index, cell) in cells.iter().enumerate() {
        let width = widths.get(index).copied().unwrap_or(0);
        spans.push(Span::styled(
            format!("{:<width$}", cell, width = width),
            style,
        ));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

/// Widget for a list body: header row, then one line per entity with the
/// selection highlighted.
pub fn list_widget(
    title: String,
    columns: &[&str],
    rows: &[ListRow],
    selected: usize,
    status: &LoadStatus,
) -> Paragraph<'static> {
    let widths = column_widths(columns, rows);
    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(Line::from(""));

    let header_cells: Vec<String> = columns.iter().map(|column| column.to_string()).collect();
    lines.push(table_line(
        &header_cells,
        &widths,
        Style::default().fg(LABEL_TEXT),
    ));

    if rows.is_empty() {
        let placeholder = match status {
            LoadStatus::Pending => "Loading...",
            LoadStatus::Failed(_) => "Nothing to show",
            LoadStatus::Succeeded => "No entries",
            LoadStatus::Idle => "",
        };
        lines.push(Line::from(Span::styled(
            format!("  {placeholder}"),
            Style::default().fg(PLACEHOLDER_TEXT),
        )));
    } else {
        for (index, row) in rows.iter().enumerate() {
            let mut line = table_line(&row.columns, &widths, Style::default().fg(HEADER_TEXT));
            if index == selected {
                line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            }
            lines.push(line);
        }
    }

    Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
