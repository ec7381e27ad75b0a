//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::App;
use super::components::{chips, ingredient_list, key_hints, order_popup, status_bar, summary};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main vertical layout
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Status bar
            Constraint::Min(10),   // Ingredients | summary + chips
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    render_title(frame, main_layout[0]);
    status_bar::render(frame, main_layout[1], app);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_layout[2]);

    ingredient_list::render(frame, content[0], app);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(content[1]);

    summary::render(frame, side[0], app);
    chips::render(frame, side[1], app);

    key_hints::render(frame, main_layout[3], app);

    if let Some(ref outcome) = app.view.outcome {
        order_popup::render(frame, area, outcome);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " Build your bowl ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " pick ingredients, tune quantities, place your order",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
