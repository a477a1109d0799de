use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

const PLACEHOLDER: &str = "describe a task";

/// Render the entry field (Insert mode): prompt, buffer with a block cursor,
/// and either the required indicator or the key hints on the right.
pub fn render_entry_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(
        " > ",
        Style::default().fg(app.theme.highlight).bg(bg),
    ));

    if app.entry_buffer.is_empty() {
        // Block cursor at the start, placeholder behind it
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        let buffer = &app.entry_buffer;
        let at = app.entry_cursor;
        let text_style = Style::default().fg(app.theme.text_bright).bg(bg);

        if at >= buffer.len() {
            spans.push(Span::styled(buffer.clone(), text_style));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        } else {
            // Cursor mid-string: reverse the grapheme under it
            let under = unicode::grapheme_at(buffer, at);
            spans.push(Span::styled(buffer[..at].to_string(), text_style));
            spans.push(Span::styled(
                under.to_string(),
                text_style.add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::styled(buffer[at + under.len()..].to_string(), text_style));
        }
    }

    // Right side: required indicator when a submit was blocked, hints otherwise
    let right = if app.entry_required {
        Span::styled(
            "* required ",
            Style::default()
                .fg(app.theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "Enter add  Esc done ",
            Style::default().fg(app.theme.dim).bg(bg),
        )
    };

    let content_width: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    let right_width = unicode::display_width(&right.content);
    if content_width + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - right_width),
            Style::default().bg(bg),
        ));
        spans.push(right);
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
