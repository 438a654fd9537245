//! Listing page state and the text derived from a filtered listing.
//!
//! A `ListingState` is the page's transient UI state (search text, facet
//! selections, sort key, grid/list toggle). It lives for one request and is
//! never shared.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::event::Event;
use crate::query::{EventQuery, FacetFilter, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// Anything other than "list" shows the grid.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("list") => ViewMode::List,
            _ => ViewMode::Grid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    pub query: String,
    pub category: FacetFilter,
    pub location: FacetFilter,
    pub sort: SortKey,
    pub view_mode: ViewMode,
}

impl Default for ListingState {
    /// The listing opens sorted by date
    fn default() -> Self {
        ListingState {
            query: String::new(),
            category: FacetFilter::All,
            location: FacetFilter::All,
            sort: SortKey::Date,
            view_mode: ViewMode::Grid,
        }
    }
}

impl ListingState {
    /// Build state from raw request parameters. A missing sort keeps the
    /// date default; an unknown one falls back to title.
    pub fn from_params(
        query: Option<&str>,
        category: Option<&str>,
        location: Option<&str>,
        sort: Option<&str>,
        view: Option<&str>,
    ) -> Self {
        ListingState {
            query: query.unwrap_or_default().to_string(),
            category: FacetFilter::parse(category),
            location: FacetFilter::parse(location),
            sort: sort.map(SortKey::parse).unwrap_or(SortKey::Date),
            view_mode: ViewMode::parse(view),
        }
    }

    pub fn to_query(&self) -> EventQuery {
        EventQuery::new(self.query.clone())
            .with_category(self.category.clone())
            .with_location(self.location.clone())
            .sorted_by(self.sort)
    }

    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Listing<'a> {
        Listing {
            events: self.to_query().run(catalog.events()),
            total: catalog.len(),
            state: self.clone(),
        }
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut filters = Vec::new();
        if !self.query.is_empty() {
            filters.push(ActiveFilter::Search(self.query.clone()));
        }
        if let FacetFilter::Only(category) = &self.category {
            filters.push(ActiveFilter::Category(category.clone()));
        }
        if let FacetFilter::Only(location) = &self.location {
            filters.push(ActiveFilter::Location(location.clone()));
        }
        filters
    }

    /// Same state with `filter` removed
    pub fn without(&self, filter: &ActiveFilter) -> Self {
        let mut next = self.clone();
        match filter {
            ActiveFilter::Search(_) => next.query.clear(),
            ActiveFilter::Category(_) => next.category = FacetFilter::All,
            ActiveFilter::Location(_) => next.location = FacetFilter::All,
        }
        next
    }

    pub fn with_view_mode(&self, view_mode: ViewMode) -> Self {
        ListingState {
            view_mode,
            ..self.clone()
        }
    }
}

/// A filter currently narrowing the listing, shown as a removable chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFilter {
    Search(String),
    Category(String),
    Location(String),
}

impl ActiveFilter {
    /// Text of the matching "clear" button in the empty state
    pub fn clear_label(&self) -> &'static str {
        match self {
            ActiveFilter::Search(_) => "Clear Search",
            ActiveFilter::Category(_) | ActiveFilter::Location(_) => "Clear Filters",
        }
    }
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveFilter::Search(q) => write!(f, "Search: \"{q}\""),
            ActiveFilter::Category(c) => write!(f, "Category: {c}"),
            ActiveFilter::Location(l) => write!(f, "Location: {l}"),
        }
    }
}

/// Result of applying a `ListingState` to the catalog.
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    pub events: Vec<&'a Event>,
    /// Size of the whole catalog
    pub total: usize,
    pub state: ListingState,
}

impl Listing<'_> {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.state.query.is_empty() {
            format!("Showing {} of {} events", self.events.len(), self.total)
        } else {
            format!(
                "Showing {} results for \"{}\"",
                self.events.len(),
                self.state.query
            )
        }
    }

    /// Message shown instead of cards when nothing matched.
    pub fn empty_message(&self) -> String {
        if self.state.query.is_empty() {
            "Try adjusting your filters to discover amazing events happening near you.".to_string()
        } else {
            format!(
                "No events match your search for \"{}\". Try different keywords or clear your search.",
                self.state.query
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogOptions;
    use crate::event::tests::sample;

    fn catalog() -> Catalog {
        let mut tech = sample(2, "Rust Meetup");
        tech.category = "Tech".to_string();
        tech.date = "2025-01-01".to_string();
        let events = vec![sample(1, "Live Music Night"), tech];
        Catalog::new(events, CatalogOptions::default()).unwrap()
    }

    #[test]
    fn default_state_is_date_sorted_grid() {
        let state = ListingState::from_params(None, None, None, None, None);
        assert_eq!(state, ListingState::default());
        assert_eq!(state.sort, SortKey::Date);
        assert_eq!(state.view_mode, ViewMode::Grid);
        assert!(state.active_filters().is_empty());
    }

    #[test]
    fn unknown_sort_falls_back_to_title() {
        let state = ListingState::from_params(None, None, None, Some("rating"), Some("list"));
        assert_eq!(state.sort, SortKey::Title);
        assert_eq!(state.view_mode, ViewMode::List);
    }

    #[test]
    fn summary_without_query_counts_against_total() {
        let catalog = catalog();
        let state = ListingState::from_params(None, Some("Tech"), None, None, None);
        let listing = state.apply(&catalog);
        assert_eq!(listing.summary(), "Showing 1 of 2 events");
    }

    #[test]
    fn summary_with_query_names_it() {
        let catalog = catalog();
        let state = ListingState::from_params(Some("music"), None, None, None, None);
        let listing = state.apply(&catalog);
        assert_eq!(listing.summary(), "Showing 1 results for \"music\"");
    }

    #[test]
    fn listing_is_sorted_by_date_by_default() {
        let catalog = catalog();
        let listing = ListingState::default().apply(&catalog);
        let ids: Vec<u64> = listing.events.iter().map(|e| e.id).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[test]
    fn empty_messages() {
        let catalog = catalog();

        let listing =
            ListingState::from_params(Some("opera"), None, None, None, None).apply(&catalog);
        assert!(listing.is_empty());
        assert_eq!(
            listing.empty_message(),
            "No events match your search for \"opera\". Try different keywords or clear your search."
        );

        let listing =
            ListingState::from_params(None, Some("Dance"), None, None, None).apply(&catalog);
        assert!(listing.is_empty());
        assert!(listing.empty_message().starts_with("Try adjusting your filters"));
    }

    #[test]
    fn active_filters_can_be_cleared_one_at_a_time() {
        let state =
            ListingState::from_params(Some("jazz"), Some("Music"), None, Some("price"), None);
        let filters = state.active_filters();
        assert_eq!(
            filters,
            [
                ActiveFilter::Search("jazz".to_string()),
                ActiveFilter::Category("Music".to_string())
            ]
        );
        assert_eq!(filters[0].to_string(), "Search: \"jazz\"");
        assert_eq!(filters[1].to_string(), "Category: Music");
        assert_eq!(filters[1].clear_label(), "Clear Filters");

        let cleared = state.without(&filters[0]);
        assert!(cleared.query.is_empty());
        assert_eq!(cleared.category, FacetFilter::Only("Music".to_string()));
        assert_eq!(cleared.sort, SortKey::Price);
    }
}
