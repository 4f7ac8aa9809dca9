//! Help overlay

use super::centered_rect;
use crate::app::App;
use crate::theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Key/description pairs, grouped by section.
const SECTIONS: [(&str, &[(&str, &str)]); 5] = [
    (
        "GLOBAL CONTROLS",
        &[
            ("Tab", "Switch focus (Menu/Meal/Planner/Log)"),
            ("m", "Toggle navigation panel"),
            ("1-4", "Follow a navigation link"),
            ("n", "New meal of the day"),
            ("?", "Toggle help"),
            ("q", "Quit application"),
        ],
    ),
    (
        "MENU",
        &[
            ("[ ] / h l", "Previous/next category chip"),
            ("/", "Search dish names"),
            ("j/k", "Select dish"),
            ("o/Enter", "Order Now"),
            ("a", "Add to Plan"),
        ],
    ),
    (
        "MEAL OF THE DAY",
        &[("Enter/Space", "Draw a new meal")],
    ),
    (
        "CALORIE PLANNER",
        &[
            ("j/k", "Select dish"),
            ("Space", "Tick/untick"),
            ("+/-", "Move target slider"),
        ],
    ),
    (
        "EVENT LOG",
        &[("j/k", "Scroll log")],
    ),
];

/// Render help overlay
pub fn render(frame: &mut Frame, app: &App) {
    // Narrow terminals get almost the full width so key columns don't wrap.
    let width_pct = if app.terminal_size.0 < 100 { 95 } else { 70 };
    let area = centered_rect(width_pct, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT_PRIMARY))
        .title(" Help ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let key_style = Style::default()
        .fg(theme::ACCENT_PRIMARY)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(theme::TEXT_PRIMARY);
    let header_style = Style::default()
        .fg(theme::WARNING)
        .add_modifier(Modifier::BOLD);
    let subtle_style = Style::default().fg(theme::INACTIVE);

    let mut lines = vec![
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                crate::constants::APP_NAME,
                Style::default()
                    .fg(theme::ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - Menu, Meal Picker & Calorie Planner "),
            Span::styled(format!("v{}", crate::constants::APP_VERSION), subtle_style),
        ]),
        Line::from(""),
    ];

    for (title, keys) in SECTIONS {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(title, header_style),
        ]));
        for (key, desc) in keys {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{key:<12}"), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        subtle_style,
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
