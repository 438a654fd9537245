//! The read-only event catalog.
//!
//! A catalog is loaded once at startup, either from the dataset bundled with
//! this crate or from a JSON/TOML file, validated, and then only read.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::{EventHubError, EventHubResult};
use crate::event::Event;

static BUNDLED_EVENTS: &str = include_str!("../data/events.json");

/// How strictly records are checked when a catalog is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogOptions {
    /// Reject records whose `price` presence disagrees with `isPaid`
    /// instead of only logging them.
    pub strict_pricing: bool,
}

/// Where a catalog was loaded from, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    /// Built directly from records with [`Catalog::new`]
    Inline,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Bundled => write!(f, "bundled catalog"),
            CatalogSource::Inline => write!(f, "in-memory catalog"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// TOML catalogs wrap the records in an `[[events]]` array.
#[derive(Deserialize)]
struct CatalogFile {
    events: Vec<Event>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<Event>,
    source: CatalogSource,
}

impl Catalog {
    /// Build a catalog from records, validating them.
    pub fn new(events: Vec<Event>, options: CatalogOptions) -> EventHubResult<Self> {
        validate(&events, options)?;
        Ok(Catalog {
            events,
            source: CatalogSource::Inline,
        })
    }

    /// The dataset shipped with this crate.
    pub fn bundled() -> EventHubResult<Self> {
        Self::bundled_with(CatalogOptions::default())
    }

    fn bundled_with(options: CatalogOptions) -> EventHubResult<Self> {
        let mut catalog = Self::from_json_str(BUNDLED_EVENTS, options)?;
        catalog.source = CatalogSource::Bundled;
        Ok(catalog)
    }

    pub fn from_json_str(content: &str, options: CatalogOptions) -> EventHubResult<Self> {
        let events: Vec<Event> = serde_json::from_str(content)
            .map_err(|e| EventHubError::CatalogParse(e.to_string()))?;
        Self::new(events, options)
    }

    pub fn from_toml_str(content: &str, options: CatalogOptions) -> EventHubResult<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| EventHubError::CatalogParse(e.to_string()))?;
        Self::new(file.events, options)
    }

    /// Load a catalog file. `.toml` files are read as TOML, anything else as JSON.
    pub fn load(path: &Path, options: CatalogOptions) -> EventHubResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| EventHubError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let mut catalog = if is_toml {
            Self::from_toml_str(&content, options)?
        } else {
            Self::from_json_str(&content, options)?
        };
        catalog.source = CatalogSource::File(path.to_path_buf());
        Ok(catalog)
    }

    /// Load `path` if given, otherwise the bundled dataset.
    pub fn load_or_bundled(path: Option<&Path>, options: CatalogOptions) -> EventHubResult<Self> {
        match path {
            Some(path) => Self::load(path, options),
            None => Self::bundled_with(options),
        }
    }

    /// All events, in catalog order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Find the event whose id stringifies to the requested id.
    ///
    /// Accepts either a number or the raw path segment; the comparison is
    /// on the decimal text, so "007" does not find event 7.
    pub fn find(&self, id: impl fmt::Display) -> Option<&Event> {
        let wanted = id.to_string();
        self.events.iter().find(|e| e.id.to_string() == wanted)
    }
}

fn validate(events: &[Event], options: CatalogOptions) -> EventHubResult<()> {
    let mut seen = HashSet::with_capacity(events.len());

    for event in events {
        if event.id == 0 {
            return Err(EventHubError::InvalidEvent {
                id: 0,
                reason: "id must be a positive integer".into(),
            });
        }

        if !seen.insert(event.id) {
            return Err(EventHubError::DuplicateId(event.id));
        }

        if let Some(price) = event.price {
            if !price.is_finite() || price < 0.0 {
                return Err(EventHubError::InvalidEvent {
                    id: event.id,
                    reason: format!("price must be a non-negative number, got {price}"),
                });
            }
        }

        if !event.has_consistent_pricing() {
            let reason = if event.is_paid {
                "paid event has no price"
            } else {
                "free event has a price"
            };

            if options.strict_pricing {
                return Err(EventHubError::InvalidEvent {
                    id: event.id,
                    reason: reason.into(),
                });
            }
            warn!(id = event.id, title = %event.title, "{reason}");
        }

        if event.calendar_date().is_none() {
            warn!(
                id = event.id,
                date = %event.date,
                "date is not YYYY-MM-DD, sorting by date may misplace this event"
            );
        }
    }

    Ok(())
}
