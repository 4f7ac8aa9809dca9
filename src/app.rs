//! Core application state and logic.
//!
//! This module contains the main [`App`] struct. It owns the catalog and one
//! controller per feature (navigation, menu, meal picker, calorie planner,
//! order popup) and routes every key event to exactly one of them.

use crate::actions::{ActionControl, ActionKind, ActionTable};
use crate::calories::CalorieCalculator;
use crate::catalog::Catalog;
use crate::constants::{MAX_LOG_LINES, MSG_NO_PICK, MSG_UNAVAILABLE, TOAST_DURATION_SECS};
use crate::menu::{MenuRenderer, MenuView};
use crate::nav::NavToggle;
use crate::picker::MealPicker;
use crate::popup::OrderPopup;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::{ListState, TableState};
use std::time::{Duration, Instant};

/// Currently focused UI panel for keyboard navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    /// Menu list with its action buttons.
    #[default]
    Menu,
    /// Meal of the day panel; Enter draws a new pick.
    Meal,
    /// Calorie planner checkboxes and slider.
    Calories,
    /// Activity log panel.
    Logs,
}

/// Current input mode determining keyboard behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode.
    #[default]
    Normal,
    /// Keystrokes edit the menu search text.
    Search,
}

/// Toast notification for temporary messages.
#[derive(Clone)]
pub struct Toast {
    /// Message to display.
    pub message: String,
    /// When the toast should disappear.
    pub expires: Instant,
}

/// Main application state container.
///
/// Each feature's state is private to its controller; `App` only wires key
/// events to controller operations and keeps UI-only state (focus, scroll
/// positions, log, toast).
///
/// # Example
///
/// ```ignore
/// let mut app = App::new(Catalog::sample(), 2000, None);
/// app.pick_meal();
/// ```
pub struct App {
    /// Flag indicating the application should exit.
    pub should_quit: bool,

    // === Data ===
    catalog: Catalog,
    actions: ActionTable,

    // === Controllers ===
    pub nav: NavToggle,
    pub menu: MenuRenderer,
    pub picker: MealPicker,
    /// Text shown in the meal of the day panel.
    pub special: String,
    pub calories: CalorieCalculator,
    pub popup: OrderPopup,

    // === Activity Log ===
    pub logs: Vec<String>,
    pub logs_scroll: u16,
    pub logs_auto_scroll: bool,

    // === UI State (Panel-based) ===
    pub focused_panel: FocusedPanel,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub menu_state: TableState,
    pub calorie_state: ListState,
    pub toast: Option<Toast>,
    pub terminal_size: (u16, u16),
}

impl App {
    /// Creates the application around a catalog.
    ///
    /// `target` seeds the calorie slider and `seed` makes the meal picker
    /// reproducible.
    pub fn new(catalog: Catalog, target: u32, seed: Option<u64>) -> Self {
        let mut app = Self {
            should_quit: false,

            catalog,
            actions: ActionTable::new(),

            nav: NavToggle::new(),
            menu: MenuRenderer::new(),
            picker: MealPicker::new(seed),
            special: String::from(MSG_NO_PICK),
            calories: CalorieCalculator::new(target),
            popup: OrderPopup::new(),

            logs: Vec::new(),
            logs_scroll: 0,
            logs_auto_scroll: true,

            focused_panel: FocusedPanel::Menu,
            input_mode: InputMode::Normal,
            show_help: false,
            menu_state: TableState::default(),
            calorie_state: ListState::default(),
            toast: None,
            terminal_size: (80, 24),
        };

        app.log(&format!(
            "INIT: SimplyTrue Foods v{} starting...",
            crate::constants::APP_VERSION
        ));
        app.log(&format!("INIT: Loaded {} dishes", app.catalog.len()));

        app.calories.build_options(&app.catalog);
        if !app.calories.options().is_empty() {
            app.calorie_state.select(Some(0));
        }
        app.sync_menu_selection();
        app.pick_meal();

        app.log(crate::constants::MSG_READY);
        app
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Renders the menu for the current filters.
    pub fn menu_view(&self) -> MenuView<'_> {
        self.menu.render(&self.catalog)
    }

    /// Add a message to the activity log with a timestamp.
    pub fn log(&mut self, message: &str) {
        let timestamp = crate::utils::log_timestamp();
        self.logs.push(format!("{timestamp} {message}"));

        if self.logs.len() > MAX_LOG_LINES {
            self.logs.remove(0);
        }

        if self.logs_auto_scroll {
            #[allow(clippy::cast_possible_truncation)]
            let scroll = self.logs.len().saturating_sub(1) as u16;
            self.logs_scroll = scroll;
        }
    }

    /// Show a toast notification and log it
    fn show_toast(&mut self, message: String) {
        self.log(&message);
        self.toast = Some(Toast {
            message,
            expires: Instant::now() + Duration::from_secs(TOAST_DURATION_SECS),
        });
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl-C quits from any mode, overlays included.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Global: Handle Help Toggle
        if self.show_help {
            self.show_help = false;
            return;
        }

        // The popup is modal: only its close controls respond.
        if self.popup.is_open() {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x' | ' ')
            ) {
                self.close_popup();
            }
            return;
        }

        if self.input_mode == InputMode::Search {
            self.handle_search_keys(key);
            return;
        }

        // Global: Quit
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        self.handle_normal_keys(key);
    }

    fn handle_search_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                let text = self.menu.text().to_string();
                self.log(&format!("FILTER: search \"{text}\""));
            }
            KeyCode::Backspace => {
                self.menu.pop_char();
                self.sync_menu_selection();
            }
            // Chords are not text.
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.menu.push_char(c);
                self.sync_menu_selection();
            }
            _ => {}
        }
    }

    fn handle_normal_keys(&mut self, key: KeyEvent) {
        // Navigation links are live only while the panel is open.
        if self.nav.is_active() {
            if let KeyCode::Char(c @ '1'..='4') = key.code {
                self.follow_nav_link(c);
                return;
            }
        }

        match key.code {
            // Global Toggles
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('m') => self.toggle_nav(),
            KeyCode::Tab => self.next_panel(),
            KeyCode::BackTab => self.previous_panel(),

            // Feature triggers (always available)
            KeyCode::Char('n') => self.pick_meal(),
            KeyCode::Char('/') => {
                self.focused_panel = FocusedPanel::Menu;
                self.input_mode = InputMode::Search;
            }
            KeyCode::Char(']') => self.next_chip(),
            KeyCode::Char('[') => self.previous_chip(),

            // Delegation to focused panel
            _ => self.handle_panel_keys(key),
        }
    }

    fn handle_panel_keys(&mut self, key: KeyEvent) {
        match self.focused_panel {
            FocusedPanel::Menu => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.menu_previous(),
                KeyCode::Down | KeyCode::Char('j') => self.menu_next(),
                KeyCode::Left | KeyCode::Char('h') => self.previous_chip(),
                KeyCode::Right | KeyCode::Char('l') => self.next_chip(),
                KeyCode::Char('o') | KeyCode::Enter => self.activate_selected(ActionKind::Order),
                KeyCode::Char('a') => self.activate_selected(ActionKind::AddToPlan),
                _ => {}
            },
            FocusedPanel::Meal => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.pick_meal();
                }
            }
            FocusedPanel::Calories => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.calorie_previous(),
                KeyCode::Down | KeyCode::Char('j') => self.calorie_next(),
                KeyCode::Char(' ') | KeyCode::Enter => {
                    if let Some(idx) = self.calorie_state.selected() {
                        self.toggle_calorie(idx);
                    }
                }
                KeyCode::Char('+' | '=') | KeyCode::Right => self.step_target(true),
                KeyCode::Char('-') | KeyCode::Left => self.step_target(false),
                _ => {}
            },
            FocusedPanel::Logs => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.logs_auto_scroll = false;
                    self.logs_scroll = self.logs_scroll.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.logs_scroll = self.logs_scroll.saturating_add(1);
                    #[allow(clippy::cast_possible_truncation)]
                    let max_scroll = self.logs.len().saturating_sub(1) as u16;
                    if self.logs_scroll >= max_scroll {
                        self.logs_scroll = max_scroll;
                        self.logs_auto_scroll = true;
                    }
                }
                _ => {}
            },
        }
    }

    // Cycle to next panel
    fn next_panel(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Menu => FocusedPanel::Meal,
            FocusedPanel::Meal => FocusedPanel::Calories,
            FocusedPanel::Calories => FocusedPanel::Logs,
            FocusedPanel::Logs => FocusedPanel::Menu,
        };
    }

    // Cycle to previous panel
    fn previous_panel(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Menu => FocusedPanel::Logs,
            FocusedPanel::Meal => FocusedPanel::Menu,
            FocusedPanel::Calories => FocusedPanel::Meal,
            FocusedPanel::Logs => FocusedPanel::Calories,
        };
    }

    // === Navigation ===

    /// Hamburger: show or hide the navigation panel.
    pub fn toggle_nav(&mut self) {
        self.nav.toggle();
        self.log(&format!("NAV: aria-expanded={}", self.nav.aria_expanded()));
    }

    fn follow_nav_link(&mut self, link: char) {
        match link {
            '1' => self.focused_panel = FocusedPanel::Menu,
            '2' => self.focused_panel = FocusedPanel::Meal,
            '3' => self.focused_panel = FocusedPanel::Calories,
            _ => self.focused_panel = FocusedPanel::Logs,
        }
        // Following a link collapses the panel.
        self.toggle_nav();
    }

    // === Menu ===

    fn next_chip(&mut self) {
        let chip = self.menu.category().next();
        self.select_chip(chip);
    }

    fn previous_chip(&mut self) {
        let chip = self.menu.category().previous();
        self.select_chip(chip);
    }

    fn select_chip(&mut self, chip: crate::catalog::CategoryFilter) {
        self.menu.select_category(chip);
        self.sync_menu_selection();
        self.log(&format!("FILTER: category {chip}"));
    }

    /// Keeps the highlighted row inside the freshly rendered list.
    fn sync_menu_selection(&mut self) {
        let len = self.menu_view().len();
        if len == 0 {
            self.menu_state.select(None);
        } else {
            let idx = self.menu_state.selected().unwrap_or(0).min(len - 1);
            self.menu_state.select(Some(idx));
        }
    }

    fn menu_next(&mut self) {
        let len = self.menu_view().len();
        if len == 0 {
            return;
        }
        let i = match self.menu_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.menu_state.select(Some(i));
    }

    fn menu_previous(&mut self) {
        let len = self.menu_view().len();
        if len == 0 {
            return;
        }
        let i = match self.menu_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.menu_state.select(Some(i));
    }

    /// Fires the given action button on the highlighted entry.
    fn activate_selected(&mut self, kind: ActionKind) {
        let control = {
            let view = self.menu_view();
            self.menu_state
                .selected()
                .and_then(|idx| view.entries().get(idx))
                .and_then(|entry| entry.action(kind))
                .cloned()
        };

        match control {
            Some(control) => self.dispatch_action(&control),
            None => self.show_toast("Select a dish first".to_string()),
        }
    }

    /// Delegated handler for every menu action control.
    ///
    /// Unknown or malformed ids open a generic popup instead of failing.
    pub fn dispatch_action(&mut self, control: &ActionControl) {
        match self.actions.dispatch(&self.catalog, control) {
            Ok(message) => {
                let tag = match control.kind {
                    ActionKind::Order => "ORDER",
                    ActionKind::AddToPlan => "PLAN",
                };
                self.log(&format!("{tag}: {message}"));
                self.popup.open(message);
            }
            Err(e) => {
                self.log(&format!("ERROR: {} failed: {e}", control.kind));
                self.popup.open(MSG_UNAVAILABLE);
            }
        }
    }

    // === Order Popup ===

    pub fn close_popup(&mut self) {
        self.popup.close();
    }

    // === Meal of the Day ===

    /// Draws a new meal of the day.
    pub fn pick_meal(&mut self) {
        match self.picker.pick_random(&self.catalog) {
            Some(text) => {
                let name = self
                    .picker
                    .current(&self.catalog)
                    .map(|item| item.name.clone())
                    .unwrap_or_default();
                self.special = text;
                self.log(&format!("PICK: Meal of the day is {name}"));
            }
            None => self.special = String::from(MSG_NO_PICK),
        }
    }

    // === Calorie Planner ===

    fn calorie_next(&mut self) {
        let len = self.calories.options().len();
        if len == 0 {
            return;
        }
        let i = match self.calorie_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.calorie_state.select(Some(i));
    }

    fn calorie_previous(&mut self) {
        let len = self.calories.options().len();
        if len == 0 {
            return;
        }
        let i = match self.calorie_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.calorie_state.select(Some(i));
    }

    /// Ticks or unticks the checkbox at `idx`.
    pub fn toggle_calorie(&mut self, idx: usize) {
        match self.calories.toggle_option(idx) {
            Ok(Some(checked)) => {
                let label = self.calories.options()[idx].label.clone();
                let meter = self.calories.recompute();
                let verb = if checked { "added" } else { "removed" };
                self.log(&format!(
                    "PLAN: {verb} {label}, total {} / {}",
                    meter.total, meter.target
                ));
            }
            Ok(None) => {}
            Err(e) => self.show_toast(format!("ERROR: {e}")),
        }
    }

    /// Moves the target slider one step.
    pub fn step_target(&mut self, up: bool) {
        let before = self.calories.target();
        let after = self.calories.step_target(up);
        if before != after {
            self.log(&format!("PLAN: target set to {after} kcal"));
        }
    }

    /// Called on each tick.
    pub fn on_tick(&mut self) {
        if let Some(ref toast) = self.toast {
            if Instant::now() > toast.expires {
                self.toast = None;
            }
        }
    }

    /// Called when terminal is resized
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Catalog::sample(), crate::constants::DEFAULT_TARGET, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, CategoryFilter};

    fn app() -> App {
        App::new(Catalog::sample(), 2000, Some(11))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_startup_state() {
        let app = app();
        assert!(!app.should_quit);
        assert!(!app.nav.is_active());
        assert!(!app.popup.is_open());
        assert_eq!(app.menu_view().len(), 6);
        assert_eq!(app.menu_state.selected(), Some(0));
        assert_eq!(app.calories.options().len(), 6);
        assert!(app.special.ends_with("kcal)"));
        assert!(app.logs.iter().any(|l| l.contains("PICK:")));
    }

    #[test]
    fn test_quit_keys() {
        let mut a = app();
        press(&mut a, KeyCode::Char('q'));
        assert!(a.should_quit);

        let mut b = app();
        b.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(b.should_quit);
    }

    #[test]
    fn test_hamburger_toggles_nav() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.nav.aria_expanded(), "true");
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.nav.aria_expanded(), "false");
    }

    #[test]
    fn test_nav_link_focuses_section_and_collapses() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.focused_panel, FocusedPanel::Calories);
        assert!(!app.nav.is_active());
    }

    fn pick_count(app: &App) -> usize {
        app.logs.iter().filter(|l| l.contains("PICK:")).count()
    }

    #[test]
    fn test_meal_link_focuses_without_repicking() {
        let mut app = app();
        let special = app.special.clone();
        let before = pick_count(&app);

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.focused_panel, FocusedPanel::Meal);
        assert_eq!(pick_count(&app), before);
        assert_eq!(app.special, special);

        press(&mut app, KeyCode::Enter);
        assert_eq!(pick_count(&app), before + 1);
    }

    #[test]
    fn test_tab_cycles_all_panels() {
        let mut app = app();
        let mut seen = vec![app.focused_panel];
        for _ in 0..4 {
            press(&mut app, KeyCode::Tab);
            seen.push(app.focused_panel);
        }
        assert_eq!(
            seen,
            vec![
                FocusedPanel::Menu,
                FocusedPanel::Meal,
                FocusedPanel::Calories,
                FocusedPanel::Logs,
                FocusedPanel::Menu,
            ]
        );
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(app.focused_panel, FocusedPanel::Logs);
    }

    #[test]
    fn test_ctrl_c_quits_from_search_and_popup() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        let mut searching = app();
        press(&mut searching, KeyCode::Char('/'));
        searching.handle_key(ctrl_c);
        assert!(searching.should_quit);
        assert_eq!(searching.menu.text(), "");

        let mut ordering = app();
        press(&mut ordering, KeyCode::Char('o'));
        assert!(ordering.popup.is_open());
        ordering.handle_key(ctrl_c);
        assert!(ordering.should_quit);
    }

    #[test]
    fn test_search_ignores_chords_but_keeps_shifted_text() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        app.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::ALT));
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT));
        assert_eq!(app.menu.text(), "W");
        assert_eq!(app.input_mode, InputMode::Search);
    }

    #[test]
    fn test_chip_then_search_combines_filters() {
        let mut app = app();
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(
            app.menu.category(),
            CategoryFilter::Only(Category::Breakfast)
        );

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);
        type_text(&mut app, "berry");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);

        let view = app.menu_view();
        assert_eq!(view.len(), 1);
        assert_eq!(view.entries()[0].item.name, "Berry Smoothie");
        assert_eq!(app.menu_state.selected(), Some(0));
    }

    #[test]
    fn test_search_typing_q_does_not_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "quinoa");
        assert!(!app.should_quit);
        assert_eq!(app.menu.text(), "quinoa");
    }

    #[test]
    fn test_no_results_clears_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "xyz");
        assert!(app.menu_view().is_empty());
        assert_eq!(app.menu_state.selected(), None);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('o'));
        assert!(!app.popup.is_open());
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_order_opens_popup_for_selected_dish() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(
            app.popup.message(),
            Some("Ordering \"Berry Smoothie\" is coming soon!")
        );
    }

    #[test]
    fn test_popup_is_modal_and_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(
            app.popup.message(),
            Some("\"Avocado Toast\" added to your meal plan.")
        );

        // Other keys are swallowed while the popup is up.
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert!(app.popup.is_open());

        press(&mut app, KeyCode::Esc);
        assert!(!app.popup.is_open());

        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.popup.is_open());
        assert_eq!(app.popup.message(), None);
    }

    #[test]
    fn test_unknown_item_opens_generic_popup() {
        let mut app = app();
        app.dispatch_action(&ActionControl {
            kind: ActionKind::Order,
            data_id: "404".to_string(),
        });
        assert_eq!(app.popup.message(), Some(MSG_UNAVAILABLE));
        assert!(app.logs.last().unwrap().contains("ERROR:"));
    }

    #[test]
    fn test_calorie_panel_toggle_and_slider() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_panel, FocusedPanel::Calories);

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.calories.total(), 430);

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.calories.target(), 2050);
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.calories.target(), 1950);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.calories.total(), 250);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_new_pick_logs() {
        let mut app = app();
        let before = app.logs.len();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.logs.len(), before + 1);
        assert!(app.picker.current(app.catalog()).is_some());
    }

    #[test]
    fn test_log_is_capped() {
        let mut app = app();
        for i in 0..(MAX_LOG_LINES + 10) {
            app.log(&format!("line {i}"));
        }
        assert_eq!(app.logs.len(), MAX_LOG_LINES);
    }

    #[test]
    fn test_toast_expires_on_tick() {
        let mut app = app();
        app.toast = Some(Toast {
            message: "old".to_string(),
            expires: Instant::now().checked_sub(Duration::from_secs(1)).unwrap(),
        });
        app.on_tick();
        assert!(app.toast.is_none());
    }
}
