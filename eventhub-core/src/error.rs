//! Error types for EventHub.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration or the event catalog.
///
/// Browsing the catalog never fails: an unknown event id is a `None`
/// from [`Catalog::find`](crate::Catalog::find), not an error.
#[derive(Error, Debug)]
pub enum EventHubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog parse error: {0}")]
    CatalogParse(String),

    #[error("Duplicate event id {0} in catalog")]
    DuplicateId(u64),

    #[error("Invalid event {id}: {reason}")]
    InvalidEvent { id: u64, reason: String },
}

/// Result type alias for EventHub operations.
pub type EventHubResult<T> = Result<T, EventHubError>;
