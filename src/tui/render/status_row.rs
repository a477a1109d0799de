use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the status row (bottom of screen, Navigate mode): key hints on the
/// left, list position on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hints = " a add  Space toggle  d delete  ? help  q quit";
    let mut spans = vec![Span::styled(
        hints,
        Style::default().fg(app.theme.dim).bg(bg),
    )];

    let position = if app.board.is_empty() {
        String::new()
    } else {
        format!("{}/{} ", app.cursor + 1, app.board.len())
    };
    let content_width = hints.chars().count();
    let position_width = position.chars().count();
    if content_width + position_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - position_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            position,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
