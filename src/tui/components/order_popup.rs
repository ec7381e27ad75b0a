//! One-shot order confirmation popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::models::totals::format_price;
use crate::order::{OrderIdSource, OrderOutcome};

const POPUP_WIDTH: u16 = 44;
const POPUP_HEIGHT: u16 = 8;

/// Renders the popup for `outcome` centered in `area`.
pub fn render(frame: &mut Frame, area: Rect, outcome: &OrderOutcome) {
    let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT);

    let (title, color, lines) = match outcome {
        OrderOutcome::Confirmed(confirmation) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "Order placed successfully!",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::raw(""),
                Line::from(vec![
                    Span::raw("Order ID: "),
                    Span::styled(
                        confirmation.order_id().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("Total Price: "),
                    Span::styled(
                        format_price(confirmation.total_price()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
            ];
            if confirmation.id_source == OrderIdSource::Generated {
                lines.push(Line::from(Span::styled(
                    "(server unreachable, local order id)",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            (" Order ", Color::Green, lines)
        }
        OrderOutcome::Failed { reason } => (
            " Order failed ",
            Color::Red,
            vec![
                Line::from(Span::styled(
                    "Your order could not be placed.",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::raw(""),
                Line::raw(reason.clone()),
                Line::raw("Your selection was kept."),
            ],
        ),
    };

    let mut lines = lines;
    lines.push(Line::from(Span::styled(
        "[Esc] Close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        popup,
    );
}

/// Returns a `width` x `height` rect centered in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_in_large_area() {
        let rect = centered(Rect::new(0, 0, 100, 40), 44, 8);
        assert_eq!(rect, Rect::new(28, 16, 44, 8));
    }

    #[test]
    fn clipped_to_small_area() {
        let rect = centered(Rect::new(2, 1, 20, 5), 44, 8);
        assert_eq!(rect, Rect::new(2, 1, 20, 5));
    }
}
