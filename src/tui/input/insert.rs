use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::form;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // Abandon the field and return to the list
            app.clear_entry();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => submit_entry(app),

        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.entry_buffer, app.entry_cursor)
            {
                app.entry_buffer.replace_range(prev..app.entry_cursor, "");
                app.entry_cursor = prev;
            }
            app.entry_required = false;
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.entry_buffer, app.entry_cursor)
            {
                app.entry_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.entry_buffer, app.entry_cursor)
            {
                app.entry_cursor = next;
            }
        }
        KeyCode::Home => {
            app.entry_cursor = 0;
        }
        KeyCode::End => {
            app.entry_cursor = app.entry_buffer.len();
        }

        // Ctrl-U: clear back to the start of the field
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.entry_buffer.replace_range(..app.entry_cursor, "");
            app.entry_cursor = 0;
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.entry_buffer.insert(app.entry_cursor, c);
            app.entry_cursor += c.len_utf8();
            app.entry_required = false;
        }

        _ => {}
    }
}

/// Submit the field through the form. An empty field is blocked by the
/// required rule and only raises the indicator; a successful submit clears
/// the field and leaves the user in Insert mode for the next entry.
fn submit_entry(app: &mut App) {
    match form::submit(&mut app.board, &app.entry_buffer) {
        Ok(_) => {
            app.clear_entry();
            // Select the row just added
            app.cursor = app.board.len() - 1;
        }
        Err(form::FormError::Empty) => {
            app.entry_required = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::Theme;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn insert_app() -> App {
        let mut app = App::new(Theme::default());
        app.mode = Mode::Insert;
        app
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_insert(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_builds_buffer() {
        let mut app = insert_app();
        type_str(&mut app, "Buy milk");
        assert_eq!(app.entry_buffer, "Buy milk");
        assert_eq!(app.entry_cursor, 8);
    }

    #[test]
    fn test_submit_creates_task_and_clears_field() {
        let mut app = insert_app();
        type_str(&mut app, "Buy milk");

        handle_insert(&mut app, key(KeyCode::Enter));

        assert_eq!(app.board.len(), 1);
        assert_eq!(app.board.tasks[0].description, "Buy milk");
        assert!(!app.board.tasks[0].completed);
        assert!(app.entry_buffer.is_empty());
        // Still in Insert mode, ready for the next entry
        assert_eq!(app.mode, Mode::Insert);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_empty_submit_is_blocked_with_indicator() {
        let mut app = insert_app();

        handle_insert(&mut app, key(KeyCode::Enter));

        assert!(app.board.is_empty());
        assert!(app.entry_buffer.is_empty());
        assert!(app.entry_required);

        // Typing clears the indicator
        type_str(&mut app, "x");
        assert!(!app.entry_required);
    }

    #[test]
    fn test_esc_cancels_without_creating() {
        let mut app = insert_app();
        type_str(&mut app, "half an idea");

        handle_insert(&mut app, key(KeyCode::Esc));

        assert!(app.board.is_empty());
        assert!(app.entry_buffer.is_empty());
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn test_backspace_removes_grapheme() {
        let mut app = insert_app();
        type_str(&mut app, "café");

        handle_insert(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.entry_buffer, "caf");

        handle_insert(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.entry_buffer, "ca");
    }

    #[test]
    fn test_cursor_movement_and_mid_insert() {
        let mut app = insert_app();
        type_str(&mut app, "ac");

        handle_insert(&mut app, key(KeyCode::Left));
        type_str(&mut app, "b");

        assert_eq!(app.entry_buffer, "abc");
        assert_eq!(app.entry_cursor, 2);

        handle_insert(&mut app, key(KeyCode::Home));
        assert_eq!(app.entry_cursor, 0);
        handle_insert(&mut app, key(KeyCode::End));
        assert_eq!(app.entry_cursor, 3);
    }

    #[test]
    fn test_ctrl_u_clears_to_start() {
        let mut app = insert_app();
        type_str(&mut app, "wipe me");
        handle_insert(&mut app, key(KeyCode::Left));

        handle_insert(
            &mut app,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );

        assert_eq!(app.entry_buffer, "e");
        assert_eq!(app.entry_cursor, 0);
    }

    #[test]
    fn test_successive_submits_append_in_order() {
        let mut app = insert_app();
        type_str(&mut app, "first");
        handle_insert(&mut app, key(KeyCode::Enter));
        type_str(&mut app, "second");
        handle_insert(&mut app, key(KeyCode::Enter));

        let titles: Vec<&str> = app
            .board
            .tasks
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(app.cursor, 1);
    }
}
