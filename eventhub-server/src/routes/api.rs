//! JSON endpoints over the same filter/sort engine as the pages

use axum::{
    Json, Router,
    extract::{Path, RawQuery, State},
    routing::get,
};
use eventhub_core::{Event, EventQuery, FacetFilter, SortKey, facets};

use crate::routes::{AppError, QueryPairs};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/{id}", get(get_event))
        .route("/categories", get(list_categories))
        .route("/locations", get(list_locations))
}

#[derive(Debug, Default)]
pub struct EventsParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub sort: Option<String>,
}

impl EventsParams {
    pub fn from_query(raw: Option<&str>) -> Self {
        let pairs = QueryPairs::parse(raw);
        EventsParams {
            q: pairs.get("q"),
            category: pairs.get("category"),
            location: pairs.get("location"),
            sort: pairs.get("sort"),
        }
    }

    /// Unlike the listing page, a missing sort here means the title fallback.
    pub fn to_query(&self) -> EventQuery {
        EventQuery::new(self.q.clone().unwrap_or_default())
            .with_category(FacetFilter::parse(self.category.as_deref()))
            .with_location(FacetFilter::parse(self.location.as_deref()))
            .sorted_by(self.sort.as_deref().map(SortKey::parse).unwrap_or_default())
    }
}

/// GET /api/events - Filtered and sorted events
async fn list_events(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Json<Vec<Event>> {
    let events = EventsParams::from_query(query.as_deref())
        .to_query()
        .run(state.catalog().events())
        .into_iter()
        .cloned()
        .collect();

    Json(events)
}

/// GET /api/events/:id - One event
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    state
        .catalog()
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Event not found: {id}")))
}

/// GET /api/categories - "all" followed by every category
async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(facets::categories(state.catalog().events()))
}

/// GET /api/locations - Every location
async fn list_locations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(facets::locations(state.catalog().events()))
}
