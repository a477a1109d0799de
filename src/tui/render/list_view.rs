use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::tui::app::App;
use crate::util::unicode;

/// Checkbox cell for a task row
fn checkbox(task: &Task) -> &'static str {
    if task.completed { "[x]" } else { "[ ]" }
}

/// Render the task list, one row per task in insertion order
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.board.is_empty() {
        let empty = Paragraph::new(" No tasks yet")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    ensure_cursor_visible(app, visible_height);

    let width = area.width as usize;
    let cursor = app.cursor;
    let scroll = app.scroll_offset;

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in app
        .board
        .tasks
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible_height)
    {
        let is_cursor = i == cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));

        let box_color = if task.completed {
            app.theme.green
        } else {
            app.theme.dim
        };
        spans.push(Span::styled(
            checkbox(task),
            Style::default().fg(box_color).bg(row_bg),
        ));
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));

        // Description, struck through and dimmed once done
        let desc_style = if task.completed {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        // Leave room for the checkbox cell and the delete affordance
        let desc_budget = width.saturating_sub(9);
        spans.push(Span::styled(
            unicode::truncate_to_width(&task.description, desc_budget),
            desc_style,
        ));

        // Cursor row: pad to full width and show the delete control
        if is_cursor {
            let content_width: usize = spans
                .iter()
                .map(|s| unicode::display_width(&s.content))
                .sum();
            let control = "d \u{2715} ";
            let control_width = unicode::display_width(control);
            if content_width + control_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width - control_width),
                    Style::default().bg(row_bg),
                ));
                spans.push(Span::styled(
                    control,
                    Style::default().fg(app.theme.red).bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Adjust the scroll offset so the cursor row is on screen
fn ensure_cursor_visible(app: &mut App, visible_height: usize) {
    if visible_height == 0 {
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }
}
