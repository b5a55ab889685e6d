//! Form-style screen behind the detail view's edit action.
//!
//! The client never writes to the backend, so the form is display-only:
//! fields show the loaded values, focus moves between rows, and Esc
//! returns to the detail screen.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::detail::FieldRow;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, ACCENT, GLOBAL_BORDER, HEADER_TEXT, LABEL_TEXT};

/// Widget for the edit body: one framed value per field, with the
/// focused row highlighted.
pub fn edit_widget(title: String, rows: &[FieldRow], focused: usize) -> Paragraph<'static> {
    let label_width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(Line::from(""));
    for (index, row) in rows.iter().enumerate() {
        let marker = if index == focused { "▸" } else { " " };
        let marker_style = if index == focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(LABEL_TEXT)
        };
        let mut line = Line::from(vec![
            Span::styled(format!(" {marker} "), marker_style),
            Span::styled(
                format!("{:<width$}", row.label, width = label_width),
                Style::default().fg(LABEL_TEXT),
            ),
            Span::raw("  "),
            Span::styled(format!("[ {} ]", row.value), Style::default().fg(HEADER_TEXT)),
        ]);
        if index == focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "   Fields are read-only in this client.",
        Style::default().fg(LABEL_TEXT),
    )));

    Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
