use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::route::EntityKind;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title, entity tabs, breadcrumb path, and the server target.
    pub fn widget(&self, active: EntityKind, path: &str, server: &str) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  libris", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
        ];
        for (index, kind) in [EntityKind::Book, EntityKind::Author].into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            let tab_style = if kind == active {
                Style::default().fg(ACCENT)
            } else {
                text_style
            };
            spans.push(Span::styled(
                format!("[{}] {}", index + 1, kind.label()),
                tab_style,
            ));
        }
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(path.to_string(), text_style));
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(
            server.to_string(),
            Style::default().fg(HEADER_SEPARATOR),
        ));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
