//! Core types for EventHub.
//!
//! This crate holds everything the server and the CLI share:
//! - `Event`, the single record type
//! - `Catalog`, the read-only set of events loaded at startup
//! - `query`, the filter/sort engine behind the listing page
//! - `facets` and `listing` for the listing controls and summaries
//! - `config` for the layered settings both binaries read

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod facets;
pub mod listing;
pub mod query;

pub use catalog::{Catalog, CatalogOptions, CatalogSource};
pub use crate::config::Settings;
pub use error::{EventHubError, EventHubResult};
pub use event::Event;
pub use query::{EventQuery, FacetFilter, SortKey};
