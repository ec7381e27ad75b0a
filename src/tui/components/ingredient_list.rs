//! Ingredient list with checkboxes and quantity steppers.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::models::totals::format_price;
use crate::session::RowView;
use crate::tui::app::{App, Focus};

/// Renders the ingredient list.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.focus == Focus::List {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Ingredients ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = app.view.rows.iter().map(row_item).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn row_item(row: &RowView) -> ListItem<'static> {
    let (checkbox, name_style) = if row.selected {
        (
            "[x] ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("[ ] ", Style::default().fg(Color::White))
    };

    // Quantity of an unselected row is shown dimmed; it does not count yet.
    let qty_style = if row.selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    ListItem::new(Line::from(vec![
        Span::styled(checkbox, name_style),
        Span::styled(format!("{:<12}", row.item.name), name_style),
        Span::styled(
            format!("{:>9} ", format_price(row.item.price)),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(format!(" - {:>2} + ", row.qty), qty_style),
    ]))
}
