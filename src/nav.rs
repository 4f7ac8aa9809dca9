//! Hamburger navigation toggle.

/// Sections reachable from the navigation panel.
pub const NAV_SECTIONS: [&str; 4] = ["Menu", "Meal of the Day", "Calorie Planner", "Event Log"];

/// Expanded/collapsed state of the navigation panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavToggle {
    expanded: bool,
}

impl NavToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the panel between expanded and collapsed.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Value of the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    /// Whether the panel carries the "active" marker and is drawn.
    pub fn is_active(&self) -> bool {
        self.expanded
    }
}
