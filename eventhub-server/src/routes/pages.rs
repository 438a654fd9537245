//! HTML pages: listing, event detail and not-found

use axum::{
    Router,
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use eventhub_core::listing::ListingState;
use tracing::debug;

use crate::render;
use crate::routes::QueryPairs;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(listing))
        .route("/events/{id}", get(event_detail))
}

/// Listing UI state carried in the query string
#[derive(Debug, Default)]
pub struct ListingParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub sort: Option<String>,
    pub view: Option<String>,
}

impl ListingParams {
    pub fn from_query(raw: Option<&str>) -> Self {
        let pairs = QueryPairs::parse(raw);
        ListingParams {
            q: pairs.get("q"),
            category: pairs.get("category"),
            location: pairs.get("location"),
            sort: pairs.get("sort"),
            view: pairs.get("view"),
        }
    }

    pub fn to_state(&self) -> ListingState {
        ListingState::from_params(
            self.q.as_deref(),
            self.category.as_deref(),
            self.location.as_deref(),
            self.sort.as_deref(),
            self.view.as_deref(),
        )
    }
}

/// GET / - Event listing with search, category filter, sort and view toggle
async fn listing(State(state): State<AppState>, RawQuery(query): RawQuery) -> Html<String> {
    let listing_state = ListingParams::from_query(query.as_deref()).to_state();
    let listing = listing_state.apply(state.catalog());
    Html(render::listing_page(&listing, &state.render_context()))
}

/// GET /events/:id - Event detail, or the not-found page
async fn event_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog().find(&id) {
        Some(event) => Html(render::detail_page(event, &state.render_context())).into_response(),
        None => {
            debug!(%id, "event not found");
            not_found_response(&state)
        }
    }
}

/// Fallback for unknown paths
pub async fn not_found(State(state): State<AppState>) -> Response {
    not_found_response(&state)
}

fn not_found_response(state: &AppState) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(render::not_found_page(&state.render_context())),
    )
        .into_response()
}
