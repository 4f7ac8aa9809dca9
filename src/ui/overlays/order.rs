//! Order confirmation popup

use super::centered_rect;
use crate::app::App;
use crate::theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the popup with its current message
pub fn render(frame: &mut Frame, app: &App) {
    let Some(message) = app.popup.message() else {
        return;
    };

    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT_PRIMARY))
        .title(Span::styled(
            " SimplyTrue Order ",
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" [Enter/x] Close  [Esc] Dismiss ").centered());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(theme::TEXT_PRIMARY))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center),
        chunks[1],
    );
}
