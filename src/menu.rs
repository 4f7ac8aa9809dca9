//! Filterable menu list.
//!
//! [`MenuRenderer`] owns the filter state (category chip and search text) and
//! produces a fresh [`MenuView`] on every render. Views borrow from the
//! catalog and never modify it.

use crate::actions::{ActionControl, ActionKind};
use crate::catalog::{Catalog, CategoryFilter, MenuItem};

/// One visible dish with its two action controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry<'a> {
    pub item: &'a MenuItem,
    pub actions: [ActionControl; 2],
}

impl<'a> MenuEntry<'a> {
    fn new(item: &'a MenuItem) -> Self {
        Self {
            item,
            actions: ActionKind::ALL.map(|kind| ActionControl::for_item(kind, item)),
        }
    }

    /// The control of the given kind.
    pub fn action(&self, kind: ActionKind) -> Option<&ActionControl> {
        self.actions.iter().find(|a| a.kind == kind)
    }
}

/// Result of a render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuView<'a> {
    /// Matching dishes, in catalog order.
    Items(Vec<MenuEntry<'a>>),
    /// Nothing matched; show the placeholder instead of a list.
    NoResults,
}

impl<'a> MenuView<'a> {
    pub fn entries(&self) -> &[MenuEntry<'a>] {
        match self {
            MenuView::Items(entries) => entries,
            MenuView::NoResults => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MenuView::NoResults)
    }
}

/// Whether a dish passes the category chip and the search text.
///
/// Text matches case-insensitively anywhere in the dish name; empty text
/// matches everything.
pub fn matches_filter(item: &MenuItem, category: CategoryFilter, text: &str) -> bool {
    category.matches(item.category)
        && (text.is_empty() || item.name.to_lowercase().contains(&text.to_lowercase()))
}

/// Dishes passing the filter, in catalog order.
pub fn visible_items<'a>(
    catalog: &'a Catalog,
    category: CategoryFilter,
    text: &str,
) -> Vec<&'a MenuItem> {
    catalog
        .items()
        .iter()
        .filter(|item| matches_filter(item, category, text))
        .collect()
}

/// Menu controller holding the current chip and search text.
#[derive(Clone, Debug, Default)]
pub struct MenuRenderer {
    category: CategoryFilter,
    text: String,
}

impl MenuRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Chip click: replaces the category and keeps the search text.
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Text input: replaces the search text and keeps the category.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn pop_char(&mut self) {
        self.text.pop();
    }

    /// Builds the full display list for the current filters.
    pub fn render<'a>(&self, catalog: &'a Catalog) -> MenuView<'a> {
        let entries: Vec<MenuEntry<'a>> = visible_items(catalog, self.category, &self.text)
            .into_iter()
            .map(MenuEntry::new)
            .collect();

        if entries.is_empty() {
            MenuView::NoResults
        } else {
            MenuView::Items(entries)
        }
    }
}
