//! UI rendering module

mod dashboard;
mod overlays;
mod widgets;

use crate::app::App;
use ratatui::Frame;

/// Main render function - draws the dashboard and any active overlays
pub fn render(frame: &mut Frame, app: &mut App) {
    dashboard::render(frame, app);

    // Order popup sits above the dashboard
    if app.popup.is_open() {
        overlays::order::render(frame, app);
    }

    // Render Help overlay if active
    if app.show_help {
        overlays::help::render(frame, app);
    }

    // Render toast notification if present
    if app.toast.is_some() {
        overlays::toast::render(frame, app);
    }
}
