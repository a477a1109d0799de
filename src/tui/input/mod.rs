mod insert;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Insert => insert::handle_insert(app, key),
    }
}

/// Handle a bracketed paste event. Only active in Insert mode — the pasted
/// text is flattened to a single line and inserted at the cursor.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode != Mode::Insert || text.is_empty() {
        return;
    }
    let clean = text.replace('\n', " ").replace('\r', "");
    app.entry_buffer.insert_str(app.entry_cursor, &clean);
    app.entry_cursor += clean.len();
    app.entry_required = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::Theme;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn insert_mode_app() -> App {
        let mut app = App::new(Theme::default());
        handle_key(&mut app, key(KeyCode::Char('a')));
        app
    }

    #[test]
    fn test_paste_inserts_at_cursor() {
        let mut app = insert_mode_app();
        handle_key(&mut app, key(KeyCode::Char('a')));
        handle_key(&mut app, key(KeyCode::Char('b')));
        app.entry_cursor = 1;

        handle_paste(&mut app, "XY");

        assert_eq!(app.entry_buffer, "aXYb");
        assert_eq!(app.entry_cursor, 3);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut app = insert_mode_app();
        handle_paste(&mut app, "two\r\nlines");
        assert_eq!(app.entry_buffer, "two lines");
    }

    #[test]
    fn test_paste_ignored_in_navigate_mode() {
        let mut app = App::new(Theme::default());
        handle_paste(&mut app, "ignored");
        assert!(app.entry_buffer.is_empty());
    }
}
