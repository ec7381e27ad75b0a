//! Selected-ingredient chips with a removal marker.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::session::ChipView;
use crate::tui::app::{App, Focus};

/// Renders the chip list.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Chips;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Your bowl ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = if app.view.chips.is_empty() {
        vec![Line::from(Span::styled(
            "Nothing selected yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let highlighted = focused.then_some(app.chip_cursor);
        wrap_chips(&app.view.chips, inner.width as usize, highlighted)
    };

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Text of one chip, e.g. `Lettuce x2 ×`.
fn chip_label(chip: &ChipView) -> String {
    format!(" {} x{} × ", chip.name, chip.qty)
}

/// Lays chips out left to right, starting a new line when the next chip
/// would overflow `width`.
fn wrap_chips(chips: &[ChipView], width: usize, highlighted: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for (i, chip) in chips.iter().enumerate() {
        let label = chip_label(chip);
        let label_width = label.width() + 1;
        if used > 0 && used + label_width > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }

        let style = if highlighted == Some(i) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Black).bg(Color::Green)
        };
        current.push(Span::styled(label, style));
        current.push(Span::raw(" "));
        used += label_width;
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}
