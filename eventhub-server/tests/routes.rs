use axum::{
    Router, body,
    body::Body,
    http::{Request, StatusCode},
};
use eventhub_core::{Catalog, CatalogOptions, Event};
use eventhub_server::{AppState, build_router};
use tower::ServiceExt;

fn event(id: u64, title: &str, category: &str, price: Option<f64>) -> Event {
    Event {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        full_description: format!("{title} full description"),
        date: format!("2025-03-{:02}", 30 - id),
        day: "Saturday".to_string(),
        time: "7:00 PM".to_string(),
        duration: "2 hours".to_string(),
        location: "Bengaluru".to_string(),
        venue: "Town Hall".to_string(),
        category: category.to_string(),
        is_paid: price.is_some(),
        price,
        attendees: "100+".to_string(),
        organizer: "Organizer".to_string(),
        contact: "hi@example.com".to_string(),
        highlights: Some(vec!["Great views".to_string()]),
    }
}

fn test_app() -> Router {
    let catalog = Catalog::new(
        vec![
            event(1, "Live Music Night", "Music", Some(500.0)),
            event(2, "Rust Meetup", "Tech", None),
            event(3, "Jazz Brunch", "Music", Some(100.0)),
        ],
        CatalogOptions::default(),
    )
    .expect("catalog");

    build_router(AppState::new(catalog, "₹"))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8(body.to_vec()).expect("utf8"))
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, body) = get(test_app(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn listing_shows_all_events_by_default() {
    let (status, body) = get(test_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Showing 3 of 3 events"));
    assert!(body.contains("Live Music Night"));
    assert!(body.contains("Rust Meetup"));
    assert!(body.contains("<title>EventHub</title>"));
}

#[tokio::test]
async fn listing_search_is_case_insensitive() {
    let (status, body) = get(test_app(), "/?q=MUSIC").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Showing 2 results for &quot;MUSIC&quot;"));
    assert!(body.contains("Live Music Night"));
    assert!(!body.contains("Rust Meetup"));
    assert!(body.contains("Search: &quot;MUSIC&quot; ×"));
}

#[tokio::test]
async fn listing_category_filter_and_empty_state() {
    let (_, body) = get(test_app(), "/?category=Tech").await;
    assert!(body.contains("Showing 1 of 3 events"));
    assert!(body.contains("Category: Tech ×"));

    let (status, body) = get(test_app(), "/?category=Dance").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No events found"));
    assert!(body.contains("Clear Filters"));
}

#[tokio::test]
async fn listing_repeated_keys_use_first_value() {
    let (status, body) = get(test_app(), "/?q=music&q=jazz&sort=price&sort=title").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Showing 2 results for &quot;music&quot;"));
    assert!(body.contains(r#"<option value="price" selected>"#));
}

#[tokio::test]
async fn listing_search_form_keeps_location() {
    let (_, body) = get(test_app(), "/?location=Bengaluru").await;
    let field = r#"<input type="hidden" name="location" value="Bengaluru">"#;
    // desktop search, mobile-menu search and the filter controls
    assert_eq!(body.matches(field).count(), 3);
}

#[tokio::test]
async fn listing_list_view_renders_list_cards() {
    let (_, body) = get(test_app(), "/?view=list").await;
    assert!(body.contains(r#"class="event-card list""#));
    assert!(!body.contains(r#"class="event-card grid""#));
}

#[tokio::test]
async fn detail_page_renders_event() {
    let (status, body) = get(test_app(), "/events/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Live Music Night - EventHub</title>"));
    assert!(body.contains("Register for ₹500"));
    assert!(body.contains("What You'll Get"));
    assert!(body.contains("Great views"));
}

#[tokio::test]
async fn detail_page_for_free_event_says_free() {
    let (_, body) = get(test_app(), "/events/2").await;
    assert!(body.contains(r#"<div class="price">Free</div>"#));
    assert!(body.contains("Register for Free"));
}

#[tokio::test]
async fn unknown_event_is_404_page() {
    for uri in ["/events/99", "/events/abc", "/events/01"] {
        let (status, body) = get(test_app(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body.contains("Event Not Found"));
        assert!(body.contains("Back to Events"));
    }
}

#[tokio::test]
async fn unknown_path_is_404_page() {
    let (status, body) = get(test_app(), "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Event Not Found"));
}

#[tokio::test]
async fn api_events_sorted_by_price() {
    let (status, body) = get(test_app(), "/api/events?sort=price").await;
    assert_eq!(status, StatusCode::OK);

    let events: Vec<Event> = serde_json::from_str(&body).expect("json");
    let ids: Vec<u64> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, [2, 3, 1]);
}

#[tokio::test]
async fn api_events_filters_by_query_and_category() {
    let (_, body) = get(test_app(), "/api/events?q=night&category=Music").await;
    let events: Vec<Event> = serde_json::from_str(&body).expect("json");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Live Music Night");
}

#[tokio::test]
async fn api_events_repeated_sort_uses_first_value() {
    let (status, body) = get(test_app(), "/api/events?sort=price&sort=title").await;
    assert_eq!(status, StatusCode::OK);

    let events: Vec<Event> = serde_json::from_str(&body).expect("json");
    let ids: Vec<u64> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, [2, 3, 1]);
}

#[tokio::test]
async fn api_event_lookup() {
    let (status, body) = get(test_app(), "/api/events/3").await;
    assert_eq!(status, StatusCode::OK);
    let event: Event = serde_json::from_str(&body).expect("json");
    assert_eq!(event.title, "Jazz Brunch");
    assert!(body.contains("\"isPaid\":true"));

    let (status, body) = get(test_app(), "/api/events/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(error["error"], "Event not found: 42");
}

#[tokio::test]
async fn api_facets() {
    let (_, body) = get(test_app(), "/api/categories").await;
    let categories: Vec<String> = serde_json::from_str(&body).expect("json");
    assert_eq!(categories, ["all", "Music", "Tech"]);

    let (_, body) = get(test_app(), "/api/locations").await;
    let locations: Vec<String> = serde_json::from_str(&body).expect("json");
    assert_eq!(locations, ["Bengaluru"]);
}
