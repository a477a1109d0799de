use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::board_ops;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything except its close keys
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        // Entry form
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.clear_entry();
            app.mode = Mode::Insert;
        }

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.board.len() {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.cursor = 0;
        }
        KeyCode::Char('G') => {
            app.cursor = app.board.len().saturating_sub(1);
        }

        // Toggle gesture on the row under the cursor
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(id) = app.selected_id() {
                board_ops::toggle(&mut app.board, id);
            }
        }

        // Delete gesture on the row under the cursor
        KeyCode::Char('d') | KeyCode::Backspace | KeyCode::Delete => {
            if let Some(id) = app.selected_id() {
                board_ops::delete(&mut app.board, id);
                app.clamp_cursor();
            }
        }

        _ => {}
    }
}
