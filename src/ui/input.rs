use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::route::EntityKind;
use crate::ui::app::App;

/// Global keys first, then the active screen's keys.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // No screen captures text, so 'q' can quit from anywhere.
    if matches!(key.code, KeyCode::Char('q')) || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('1') => {
            app.switch_kind(EntityKind::Book);
            return;
        }
        KeyCode::Char('2') => {
            app.switch_kind(EntityKind::Author);
            return;
        }
        KeyCode::Char('r') => {
            app.refresh();
            return;
        }
        _ => {}
    }

    if app.route().is_edit() {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => app.go_back(),
            KeyCode::Up => app.move_edit_focus(-1),
            KeyCode::Down => app.move_edit_focus(1),
            _ => {}
        }
        return;
    }

    if app.route().is_detail() {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.go_back(),
            KeyCode::Char('e') => app.open_edit(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter => app.open_selected(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
