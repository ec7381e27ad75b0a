//! Nutrition and price summary panel with the submit control.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{App, Pending};

/// Renders the summary panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let display = app.view.totals.totals.display();

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Calories  ", label),
            Span::styled(display.calories_text(), value),
        ]),
        Line::from(vec![
            Span::styled("Protein   ", label),
            Span::styled(format!("{} g", display.protein_text()), value),
        ]),
        Line::from(vec![
            Span::styled("Carbs     ", label),
            Span::styled(format!("{} g", display.carbs_text()), value),
        ]),
        Line::from(vec![
            Span::styled("Fat       ", label),
            Span::styled(format!("{} g", display.fat_text()), value),
        ]),
        Line::from(vec![
            Span::styled("Price     ", label),
            Span::styled(display.price_text(), value.fg(Color::Yellow)),
        ]),
        Line::raw(""),
    ];

    lines.push(submit_line(app));

    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn submit_line(app: &App) -> Line<'static> {
    if app.pending == Some(Pending::Submit) {
        return Line::from(Span::styled(
            " Placing order... ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
    }

    if app.submit_enabled() {
        Line::from(Span::styled(
            " [Enter] Place order ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            " Place order ",
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        ))
    }
}
