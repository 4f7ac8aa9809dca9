//! Reusable dashboard widgets.

pub mod footer;
pub mod ring;
