//! Toast notification overlay

use crate::app::App;
use crate::theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render toast notification in the bottom-right corner, above the footer
pub fn render(frame: &mut Frame, app: &App) {
    let Some(ref toast) = app.toast else {
        return;
    };

    let area = frame.area();
    let width = (area.width / 3).clamp(24, 50).min(area.width);
    let inner_width = width.saturating_sub(2).max(1) as usize;

    #[allow(clippy::cast_possible_truncation)]
    let text_lines = toast.message.chars().count().div_ceil(inner_width).max(1) as u16;
    let height = (text_lines + 2).min(area.height);

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };

    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT_PRIMARY))
        .title(Span::styled(
            " INFO ",
            Style::default()
                .fg(Color::Black)
                .bg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(
        Paragraph::new(toast.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center),
        toast_area,
    );
}
