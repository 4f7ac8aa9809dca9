//! Utility functions for formatting and path handling.
//!
//! This module provides small helpers shared by the dashboard and the CLI:
//! kcal formatting, the text slider, truncation, timestamps and `~` expansion.

use std::path::PathBuf;

/// Formats a kcal amount with thousands separators.
///
/// # Example
///
/// ```ignore
/// assert_eq!(format_kcal(1440), "1,440 kcal");
/// ```
pub fn format_kcal(kcal: u64) -> String {
    let digits = kcal.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped} kcal")
}

/// Draws a horizontal range slider as text.
///
/// # Arguments
///
/// * `value` - Current slider value
/// * `min` / `max` - Slider bounds
/// * `width` - Number of track cells, including the thumb
///
/// # Returns
///
/// A string of `width` characters with `●` marking the thumb.
pub fn slider_track(value: u32, min: u32, max: u32, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let span = max.saturating_sub(min).max(1);
    let pos = value.clamp(min, max) - min;
    #[allow(clippy::cast_possible_truncation)]
    let thumb = (u64::from(pos) * (width as u64 - 1) / u64::from(span)) as usize;

    (0..width)
        .map(|i| match i.cmp(&thumb) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

/// Cuts a dish description down to `width` characters, ending in `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.char_indices().nth(width).is_none() {
        return text.to_string();
    }
    let end = text
        .char_indices()
        .nth(width.saturating_sub(1))
        .map_or(text.len(), |(i, _)| i);
    format!("{}…", &text[..end])
}

/// Wall-clock stamp for event log lines.
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Expands a leading `~/` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}
