//! The read-only menu catalog.
//!
//! The catalog is an ordered list of [`MenuItem`]s built once at startup,
//! either from the built-in sample menu or from a JSON file. It is never
//! mutated afterwards: every filter and pick produces a derived view.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// Meal category a dish belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Snack,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Snack => "snack",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category chip selection: everything, or a single category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Chips as they appear on screen, left to right.
    pub const CHIPS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Breakfast),
        CategoryFilter::Only(Category::Lunch),
        CategoryFilter::Only(Category::Snack),
    ];

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    /// Human-readable chip label.
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(Category::Breakfast) => "Breakfast",
            CategoryFilter::Only(Category::Lunch) => "Lunch",
            CategoryFilter::Only(Category::Snack) => "Snacks",
        }
    }

    /// Next chip to the right, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::CHIPS.iter().position(|c| *c == self).unwrap_or(0);
        Self::CHIPS[(idx + 1) % Self::CHIPS.len()]
    }

    /// Previous chip to the left, wrapping around.
    pub fn previous(self) -> Self {
        let idx = Self::CHIPS.iter().position(|c| *c == self).unwrap_or(0);
        Self::CHIPS[(idx + Self::CHIPS.len() - 1) % Self::CHIPS.len()]
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "breakfast" => Ok(CategoryFilter::Only(Category::Breakfast)),
            "lunch" => Ok(CategoryFilter::Only(Category::Lunch)),
            "snack" | "snacks" => Ok(CategoryFilter::Only(Category::Snack)),
            _ => Err(AppError::InvalidCategory(s.to_string())),
        }
    }
}

/// A single dish on the menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique, positive identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Short description.
    pub desc: String,
    /// Energy value in kilocalories.
    pub kcal: u32,
    pub category: Category,
}

/// Ordered, immutable collection of menu items.
#[derive(Clone, Debug)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog after checking ids, names and kcal values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCatalog`] if the list is empty, an id is zero
    /// or repeated, a name is blank, or a kcal value is zero.
    pub fn from_items(items: Vec<MenuItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(AppError::InvalidCatalog("no menu items".to_string()));
        }

        let mut seen = HashSet::new();
        for item in &items {
            if item.id == 0 {
                return Err(AppError::InvalidCatalog(format!(
                    "item {:?} has id 0",
                    item.name
                )));
            }
            if !seen.insert(item.id) {
                return Err(AppError::InvalidCatalog(format!(
                    "duplicate id {}",
                    item.id
                )));
            }
            if item.name.trim().is_empty() {
                return Err(AppError::InvalidCatalog(format!(
                    "item {} has an empty name",
                    item.id
                )));
            }
            if item.kcal == 0 {
                return Err(AppError::InvalidCatalog(format!(
                    "item {:?} has no kcal value",
                    item.name
                )));
            }
        }

        Ok(Self { items })
    }

    /// Loads and validates a catalog from a JSON array of menu items.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails validation.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let items: Vec<MenuItem> = serde_json::from_str(&text)?;
        Self::from_items(items)
    }

    /// The built-in `SimplyTrue` Foods menu.
    pub fn sample() -> Self {
        let item = |id, name: &str, desc: &str, kcal, category| MenuItem {
            id,
            name: name.to_string(),
            desc: desc.to_string(),
            kcal,
            category,
        };

        Self {
            items: vec![
                item(
                    1,
                    "Avocado Toast",
                    "Whole grain bread topped with smashed avocado and seeds",
                    250,
                    Category::Breakfast,
                ),
                item(
                    2,
                    "Berry Smoothie",
                    "Mixed berries blended with almond milk and chia seeds",
                    180,
                    Category::Breakfast,
                ),
                item(
                    3,
                    "Quinoa Salad",
                    "Quinoa, chickpeas, cucumbers, tomatoes, and lemon dressing",
                    340,
                    Category::Lunch,
                ),
                item(
                    4,
                    "Chicken Wrap",
                    "Grilled chicken, lettuce, and yogurt sauce in a whole wheat wrap",
                    400,
                    Category::Lunch,
                ),
                item(
                    5,
                    "Energy Balls",
                    "Dates, nuts, cocoa, and coconut rolled into bite-sized balls",
                    120,
                    Category::Snack,
                ),
                item(
                    6,
                    "Veggie Sticks & Hummus",
                    "Carrot and celery sticks served with homemade hummus",
                    150,
                    Category::Snack,
                ),
            ],
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by id.
    pub fn find(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}
