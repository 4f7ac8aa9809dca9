use crate::app::{App, FocusedPanel, InputMode};
use crate::catalog::CategoryFilter;
use crate::menu::MenuView;
use crate::nav::NAV_SECTIONS;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::widgets;
use crate::theme;

/// Render the dashboard view
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // 1. Header with hamburger (1 row)
    // 2. Main Content (Flexible)
    // 3. Command Footer (1 row)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, app, chunks[0]);
    widgets::footer::render_dashboard(frame, app, chunks[2]);

    // Navigation panel only takes space while expanded
    let content = if app.nav.is_active() {
        let split =
            Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).split(chunks[1]);
        render_navigation(frame, split[0]);
        split[1]
    } else {
        chunks[1]
    };

    // Left: Menu browsing | Right: Calorie planner + log
    let main_layout = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(content);

    let menu_layout = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(5),
    ])
    .split(main_layout[0]);

    render_chips(frame, app, menu_layout[0]);
    render_search(frame, app, menu_layout[1]);
    render_menu(frame, app, menu_layout[2]);
    render_meal_of_the_day(frame, app, menu_layout[3]);

    let side_layout = Layout::vertical([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_layout[1]);

    render_calorie_planner(frame, app, side_layout[0]);
    render_activity_log(frame, app, side_layout[1]);
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(theme::BORDER_FOCUSED)
    } else {
        Style::default().fg(theme::BORDER_DEFAULT)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let hamburger = if app.nav.is_active() { " ✕ " } else { " ☰ " };
    let meter = app.calories.recompute();

    let line = Line::from(vec![
        Span::styled(
            hamburger,
            Style::default()
                .fg(Color::Black)
                .bg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} v{} ", crate::constants::APP_NAME, crate::constants::APP_VERSION),
            Style::default()
                .fg(theme::ACCENT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(theme::NORD_POLAR_NIGHT_4)),
        Span::raw("Category: "),
        Span::styled(
            app.menu.category().label(),
            Style::default().fg(theme::TEXT_PRIMARY),
        ),
        Span::styled(" │ ", Style::default().fg(theme::NORD_POLAR_NIGHT_4)),
        Span::raw("Plan: "),
        Span::styled(
            format!(
                "{} / {}",
                meter.total,
                crate::utils::format_kcal(u64::from(meter.target))
            ),
            Style::default().fg(if meter.over_target() {
                theme::OVERFLOW
            } else {
                theme::NORD_GREEN
            }),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_navigation(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT_PRIMARY))
        .title(Span::styled(
            " Navigation ",
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));

    let lines: Vec<Line> = NAV_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, section)| {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", i + 1),
                    Style::default()
                        .fg(theme::ACCENT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*section, Style::default().fg(theme::TEXT_PRIMARY)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_chips(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel_block(" Categories ", false);
    let active = app.menu.category();

    let mut spans = Vec::new();
    for chip in CategoryFilter::CHIPS {
        let style = if chip == active {
            Style::default()
                .fg(Color::Black)
                .bg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::INACTIVE)
        };
        spans.push(Span::styled(format!(" {} ", chip.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Search;
    let block = panel_block(" Search ", editing);

    let mut spans = vec![Span::styled(" > ", Style::default().fg(theme::NORD_POLAR_NIGHT_4))];
    if app.menu.text().is_empty() && !editing {
        spans.push(Span::styled(
            "Press / to search dishes",
            Style::default().fg(theme::NORD_POLAR_NIGHT_4),
        ));
    } else {
        spans.push(Span::styled(
            app.menu.text(),
            Style::default().fg(theme::TEXT_PRIMARY),
        ));
    }
    if editing {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_menu(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Menu;
    let block = panel_block(" Menu ", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Fresh render on every frame; nothing is patched in place.
    let view = app.menu.render(app.catalog());
    let entries = match &view {
        MenuView::NoResults => {
            frame.render_widget(
                Paragraph::new(crate::constants::MSG_NO_RESULTS)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme::INACTIVE)),
                inner,
            );
            return;
        }
        MenuView::Items(entries) => entries,
    };

    let selected = app.menu_state.selected();
    let rows: Vec<Row> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let item = entry.item;
            let is_selected = selected == Some(i);

            let dish = Text::from(vec![
                Line::from(Span::styled(
                    item.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    crate::utils::truncate(&item.desc, 48),
                    Style::default().fg(theme::INACTIVE),
                )),
            ]);

            let button_style = if is_selected && focused {
                Style::default().fg(theme::ACCENT_PRIMARY)
            } else {
                Style::default().fg(theme::NORD_POLAR_NIGHT_4)
            };
            let buttons: Vec<Span> = entry
                .actions
                .iter()
                .flat_map(|action| {
                    [
                        Span::styled(
                            format!("[{}] {}", action.kind.key(), action.kind.label()),
                            button_style,
                        ),
                        Span::raw("  "),
                    ]
                })
                .collect();

            let style = if is_selected {
                Style::default()
                    .bg(theme::ROW_SELECTED_BG)
                    .fg(theme::ROW_SELECTED_FG)
            } else {
                Style::default().fg(theme::TEXT_PRIMARY)
            };

            Row::new(vec![
                Cell::from(dish),
                Cell::from(Span::styled(
                    format!("{} kcal", item.kcal),
                    Style::default().fg(theme::NORD_YELLOW),
                )),
                Cell::from(Line::from(buttons)),
            ])
            .height(2)
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(30),
        ],
    );
    // Rows borrow the catalog through `app`, so render against a copy of the state.
    let mut state = app.menu_state;
    frame.render_stateful_widget(table, inner, &mut state);
    app.menu_state = state;
}

fn render_meal_of_the_day(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel_block(" Meal of the Day ", app.focused_panel == FocusedPanel::Meal)
        .title_bottom(Line::from(" [n] New pick ").right_aligned());

    frame.render_widget(
        Paragraph::new(app.special.as_str())
            .style(Style::default().fg(theme::TEXT_PRIMARY))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn render_calorie_planner(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Calories;
    let title = format!(
        " Calorie Planner ({} selected) ",
        app.calories.selected().len()
    );
    let block = panel_block(&title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    #[allow(clippy::cast_possible_truncation)]
    let list_height = app.calories.options().len() as u16;
    let chunks = Layout::vertical([
        Constraint::Length(list_height),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(inner);

    // 1. Checkboxes
    let items: Vec<ListItem> = app
        .calories
        .options()
        .iter()
        .map(|option| {
            let (mark, style) = if option.checked {
                ("[x]", Style::default().fg(theme::SUCCESS))
            } else {
                ("[ ]", Style::default().fg(theme::TEXT_PRIMARY))
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{mark} "), style),
                Span::styled(option.label.as_str(), style),
            ]))
        })
        .collect();

    let highlight = if focused {
        Style::default()
            .bg(theme::ROW_SELECTED_BG)
            .fg(theme::ROW_SELECTED_FG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items).highlight_style(highlight);
    frame.render_stateful_widget(list, chunks[0], &mut app.calorie_state);

    // 2. Progress ring
    let meter = app.calories.recompute();
    widgets::ring::render(frame, meter, chunks[1]);

    // 3. Target slider with paired value
    let track_width = (chunks[2].width as usize).saturating_sub(24).max(4);
    let slider = Line::from(vec![
        Span::styled(" Target ", Style::default().fg(theme::TEXT_SECONDARY)),
        Span::styled(
            crate::utils::slider_track(
                meter.target,
                crate::constants::TARGET_MIN,
                crate::constants::TARGET_MAX,
                track_width,
            ),
            Style::default().fg(theme::ACCENT_PRIMARY),
        ),
        Span::raw(" "),
        Span::styled(
            crate::utils::format_kcal(u64::from(meter.target)),
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(slider), chunks[2]);
}

fn render_activity_log(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel_block(" Event Log ", app.focused_panel == FocusedPanel::Logs);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.logs.is_empty() {
        frame.render_widget(
            Paragraph::new("No activity yet").alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let logs: Vec<Line> = app
        .logs
        .iter()
        .map(|msg| {
            let (timestamp, content) = msg.split_once(' ').unwrap_or(("", msg.as_str()));

            let style = if content.starts_with("ERROR") {
                Style::default().fg(theme::ERROR)
            } else if content.starts_with("ORDER") {
                Style::default().fg(theme::SUCCESS)
            } else if content.starts_with("PLAN") || content.starts_with("PICK") {
                Style::default().fg(theme::ACCENT_SECONDARY)
            } else if content.starts_with("FILTER") || content.starts_with("NAV") {
                Style::default().fg(theme::WARNING)
            } else {
                Style::default().fg(theme::INACTIVE)
            };

            Line::from(vec![
                Span::styled(
                    format!("[{timestamp}] "),
                    Style::default().fg(theme::TEXT_SECONDARY),
                ),
                Span::styled(content, style),
            ])
        })
        .collect();

    #[allow(clippy::cast_possible_truncation)]
    let scroll_offset = if app.logs_auto_scroll {
        logs.len().saturating_sub(inner.height as usize) as u16
    } else {
        app.logs_scroll
    };

    frame.render_widget(
        Paragraph::new(logs)
            .wrap(Wrap { trim: true })
            .scroll((scroll_offset, 0)),
        inner,
    );
}
