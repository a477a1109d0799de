use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::task::{Board, TaskId};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving through the list, toggling and deleting
    Navigate,
    /// Typing into the entry field
    Insert,
}

/// Main application state.
///
/// Owns the board for the lifetime of the session. Everything here is
/// transient: when the session ends, the board and all tasks go with it.
pub struct App {
    pub board: Board,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the task list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Entry field contents (Insert mode)
    pub entry_buffer: String,
    /// Byte offset of the entry cursor, always on a grapheme boundary
    pub entry_cursor: usize,
    /// A submit was blocked on an empty field; cleared on the next edit
    pub entry_required: bool,
    /// Help overlay visible
    pub show_help: bool,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        App {
            board: Board::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            scroll_offset: 0,
            entry_buffer: String::new(),
            entry_cursor: 0,
            entry_required: false,
            show_help: false,
        }
    }

    /// Id of the task under the cursor
    pub fn selected_id(&self) -> Option<TaskId> {
        self.board.tasks.get(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor inside the list after a mutation
    pub fn clamp_cursor(&mut self) {
        let len = self.board.len();
        if len == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Reset the entry field to empty
    pub fn clear_entry(&mut self) {
        self.entry_buffer.clear();
        self.entry_cursor = 0;
        self.entry_required = false;
    }
}

/// Run the TUI application until the user quits
pub fn run(theme: Theme) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        event::EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), event::DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        event::DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => {
                    input::handle_paste(app, &text);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
