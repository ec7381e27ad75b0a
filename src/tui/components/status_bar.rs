//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::catalog::CatalogSource;
use crate::totals::TotalsSource;
use crate::tui::app::App;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let view = &app.view;

    let catalog_color = match view.catalog_source {
        CatalogSource::Remote => Color::Green,
        CatalogSource::Fallback => Color::Yellow,
    };
    let totals_color = match view.totals.source {
        TotalsSource::Remote => Color::Green,
        TotalsSource::Local => Color::Yellow,
    };

    let fallback_span = if view.fallbacks.total() > 0 {
        Span::styled(
            format!(
                " fallbacks c{}/t{}/o{} ",
                view.fallbacks.catalog, view.fallbacks.totals, view.fallbacks.orders
            ),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::raw("")
    };

    let pending_span = match app.pending {
        Some(pending) => Span::styled(
            format!(" {} ", pending.label()),
            Style::default().fg(Color::Cyan),
        ),
        None => Span::raw(""),
    };

    let error_span = if let Some(ref error) = app.error_message {
        Span::styled(
            format!(" {} ", error.message),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", view.backend),
            Style::default().fg(Color::White),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" {} ", view.catalog_source.label()),
            Style::default().fg(catalog_color),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" {} ", view.totals.source.label()),
            Style::default().fg(totals_color),
        ),
        Span::raw("│"),
        fallback_span,
        pending_span,
        error_span,
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
