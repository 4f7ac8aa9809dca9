//! Application-wide constants and configuration values.
//!
//! This module defines the static configuration used throughout the menu
//! browser, including timing, calorie planner bounds, ring geometry and the
//! messages shown to the user.

// === Application Metadata ===

/// Application name used in the header and help overlay.
pub const APP_NAME: &str = "SimplyTrue Foods";
/// Current application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Timing Configuration ===

/// UI refresh rate in milliseconds.
pub const DEFAULT_TICK_RATE: u64 = 250;
/// How long a toast stays on screen.
pub const TOAST_DURATION_SECS: u64 = 3;
/// Maximum number of retained activity log lines.
pub const MAX_LOG_LINES: usize = 1000;

// === Calorie Planner ===

/// Lowest value the target slider accepts.
pub const TARGET_MIN: u32 = 100;
/// Highest value the target slider accepts.
pub const TARGET_MAX: u32 = 3000;
/// Slider increment per key press.
pub const TARGET_STEP: u32 = 50;
/// Slider position at startup.
pub const DEFAULT_TARGET: u32 = 2000;
/// Radius of the progress ring, in ring units.
pub const RING_RADIUS: f64 = 90.0;

// === UI Messages ===

/// Ready state message.
pub const MSG_READY: &str = "SUCCESS: Menu loaded. Press [?] for help.";
/// Placeholder shown when the filters match nothing.
pub const MSG_NO_RESULTS: &str = "No dishes found.";
/// Placeholder for an empty meal of the day.
pub const MSG_NO_PICK: &str = "Nothing on the menu today.";
/// Popup text used when an action points at an unknown dish.
pub const MSG_UNAVAILABLE: &str = "Sorry, that dish is not available.";
