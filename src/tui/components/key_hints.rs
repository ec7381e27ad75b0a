//! Keybinding hints for the bottom line.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, Focus};

/// Renders keybinding hints for the current focus.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = if app.popup_open() {
        &[("Esc", "close"), ("q", "quit")]
    } else {
        match app.focus {
            Focus::List => &[
                ("j/k", "move"),
                ("space", "select"),
                ("+/-", "qty"),
                ("x", "remove"),
                ("Tab", "bowl"),
                ("Enter", "order"),
                ("q", "quit"),
            ],
            Focus::Chips => &[
                ("h/l", "move"),
                ("x", "remove"),
                ("Tab", "list"),
                ("Enter", "order"),
                ("q", "quit"),
            ],
        }
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ));
        spans.push(Span::styled(
            format!(" {action} "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
