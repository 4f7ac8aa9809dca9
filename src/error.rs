//! Domain error types.
//!
//! Every failure in the menu browser is local and recoverable. These errors
//! are surfaced to the user as a popup, a toast or a log line, and converted
//! into a `color_eyre::Report` at the process boundary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no menu item with id {0}")]
    UnknownItem(u32),

    #[error("invalid item id: {0:?}")]
    InvalidItemId(String),

    #[error("invalid kcal value: {0:?}")]
    InvalidKcal(String),

    #[error("unknown category: {0:?} (expected all, breakfast, lunch or snack)")]
    InvalidCategory(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("failed to read catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    CatalogJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
