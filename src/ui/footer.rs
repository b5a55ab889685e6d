use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::route::Route;
use crate::store::LoadStatus;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Load status on the left, key hints beside it, version on the
    /// right.
    pub fn widget(
        &self,
        area: Rect,
        status: &LoadStatus,
        spinner_frame: usize,
        hints: &str,
    ) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (status_text, status_style) = status_segment(status, spinner_frame);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let status_width = status_text.chars().count();
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(status_width)
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(status_text, status_style),
            Span::styled(hints.to_string(), text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// Key hints for the footer, per screen.
pub fn hints_for(route: &Route) -> &'static str {
    if route.is_edit() {
        " Esc: Back │ ↑/↓: Field │ q: Quit"
    } else if route.is_detail() {
        " b: Back │ e: Edit │ r: Reload │ q: Quit"
    } else {
        " ↑/↓: Select │ Enter: Open │ 1/2: Entities │ r: Reload │ q: Quit"
    }
}

fn status_segment(status: &LoadStatus, spinner_frame: usize) -> (String, Style) {
    match status {
        LoadStatus::Idle => (
            String::new(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ),
        LoadStatus::Pending => (
            format!(" {} loading │", SPINNER[spinner_frame % SPINNER.len()]),
            Style::default().fg(STATUS_PENDING),
        ),
        LoadStatus::Succeeded => (" ready │".to_string(), Style::default().fg(STATUS_OK)),
        LoadStatus::Failed(error) => (
            format!(" load failed: {} │", error.message()),
            Style::default().fg(STATUS_ERROR),
        ),
    }
}
