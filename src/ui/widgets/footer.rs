//! Footer widget with keybinding hints

use crate::app::{App, FocusedPanel, InputMode};
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Hints for the current mode and focused panel.
fn hints_for(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.popup.is_open() {
        return vec![("Enter/x", "Close"), ("Esc", "Dismiss")];
    }
    if app.input_mode == InputMode::Search {
        return vec![
            ("Type", "Filter dishes"),
            ("Bksp", "Delete"),
            ("Enter/Esc", "Done"),
        ];
    }

    let mut hints = match app.focused_panel {
        FocusedPanel::Menu => vec![
            ("j/k", "Select"),
            ("o", "Order"),
            ("a", "Add to Plan"),
            ("/", "Search"),
            ("[ ]", "Category"),
        ],
        FocusedPanel::Meal => vec![("Enter", "Draw Again")],
        FocusedPanel::Calories => vec![("j/k", "Select"), ("Space", "Tick"), ("+/-", "Target")],
        FocusedPanel::Logs => vec![("j/k", "Scroll")],
    };
    hints.extend([
        ("n", "New Pick"),
        ("m", "Menu"),
        ("Tab", "Switch Panel"),
        ("?", "Help"),
        ("q", "Quit"),
    ]);
    hints
}

/// Render dashboard footer
pub fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let hints = hints_for(app);
    render_hints(frame, area, &hints);
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = vec![Span::raw(" ")];

    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("[", Style::default().fg(theme::NORD_POLAR_NIGHT_4)));
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("]", Style::default().fg(theme::NORD_POLAR_NIGHT_4)));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*action, Style::default().fg(theme::INACTIVE)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_hints_follow_focus_and_modes() {
        let mut app = App::new(Catalog::sample(), 2000, Some(1));
        assert!(hints_for(&app).contains(&("o", "Order")));

        app.focused_panel = FocusedPanel::Meal;
        assert_eq!(hints_for(&app)[0], ("Enter", "Draw Again"));

        app.focused_panel = FocusedPanel::Calories;
        assert!(hints_for(&app).contains(&("+/-", "Target")));

        app.input_mode = InputMode::Search;
        assert_eq!(hints_for(&app).last(), Some(&("Enter/Esc", "Done")));

        app.popup.open("hi");
        assert_eq!(hints_for(&app)[0], ("Enter/x", "Close"));
    }
}
