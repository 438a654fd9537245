//! Filter/sort engine behind the listing page.
//!
//! Everything here is a pure function of the events passed in: the input
//! slice is never reordered and the result is a fresh `Vec` of references.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::ALL;
use crate::event::Event;

/// Ordering applied to the filtered events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Lexicographic on `date`
    Date,
    /// Numeric on `price`, missing price as 0
    Price,
    /// Lexicographic on `title`
    #[default]
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Date, SortKey::Price, SortKey::Title];

    /// Parse a sort key; anything unrecognised falls back to `Title`.
    pub fn parse(value: &str) -> Self {
        match value {
            "date" => SortKey::Date,
            "price" => SortKey::Price,
            _ => SortKey::Title,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Price => "price",
            SortKey::Title => "title",
        }
    }

    /// Label shown in the sort picker
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Date => "Date",
            SortKey::Price => "Price",
            SortKey::Title => "Name",
        }
    }

    pub fn compare(&self, a: &Event, b: &Event) -> Ordering {
        match self {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Price => a.sort_price().total_cmp(&b.sort_price()),
            SortKey::Title => a.title.cmp(&b.title),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selected value of a facet control (category or location).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetFilter {
    /// The "all" sentinel
    #[default]
    All,
    /// Exact, case-sensitive match on the facet field
    Only(String),
}

impl FacetFilter {
    /// Missing, empty and "all" values mean no restriction.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(ALL) => FacetFilter::All,
            Some(v) => FacetFilter::Only(v.to_string()),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            FacetFilter::All => true,
            FacetFilter::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetFilter::All)
    }

    /// The selected value, or the "all" sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            FacetFilter::All => ALL,
            FacetFilter::Only(v) => v,
        }
    }
}

/// A complete listing request: free text, facet selections and sort key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQuery {
    pub text: String,
    pub category: FacetFilter,
    pub location: FacetFilter,
    pub sort: SortKey,
}

impl EventQuery {
    pub fn new(text: impl Into<String>) -> Self {
        EventQuery {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: FacetFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_location(mut self, location: FacetFilter) -> Self {
        self.location = location;
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Filter predicate, with the lowercased search text precomputed.
    fn matches_with(&self, event: &Event, needle: &str) -> bool {
        let matches_text = self.text.is_empty()
            || [
                &event.title,
                &event.description,
                &event.location,
                &event.venue,
                &event.category,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(needle));

        matches_text
            && self.category.matches(&event.category)
            && self.location.matches(&event.location)
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.matches_with(event, &self.text.to_lowercase())
    }

    /// Filter and stable-sort `events`.
    pub fn run<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let needle = self.text.to_lowercase();

        let mut results: Vec<&Event> = events
            .iter()
            .filter(|event| self.matches_with(event, &needle))
            .collect();

        // sort_by is stable, so equal keys keep catalog order
        results.sort_by(|a, b| self.sort.compare(a, b));
        results
    }
}
