//! HTML rendering for the listing, detail and not-found pages.
//!
//! Pages are plain server-rendered HTML. Listing controls are GET forms and
//! links, so the page's UI state round-trips through the query string.

use std::fmt::Write;

use eventhub_core::constants::SITE_NAME;
use eventhub_core::facets::{self, FacetOption};
use eventhub_core::listing::{Listing, ListingState, ViewMode};
use eventhub_core::{Catalog, Event, SortKey};
use url::form_urlencoded;

/// How pages link to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Served by eventhub-server: `/` and `/events/{id}`
    Server,
    /// Pre-rendered files: `/index.html` and `/events/{id}.html`
    Static,
}

pub struct RenderContext<'a> {
    pub catalog: &'a Catalog,
    pub currency: &'a str,
    pub links: LinkStyle,
}

impl<'a> RenderContext<'a> {
    pub fn server(catalog: &'a Catalog, currency: &'a str) -> Self {
        RenderContext {
            catalog,
            currency,
            links: LinkStyle::Server,
        }
    }

    pub fn static_site(catalog: &'a Catalog, currency: &'a str) -> Self {
        RenderContext {
            catalog,
            currency,
            links: LinkStyle::Static,
        }
    }

    /// Static pages have no server behind them, so search and pickers are hidden.
    fn interactive(&self) -> bool {
        self.links == LinkStyle::Server
    }

    pub fn home_href(&self) -> &'static str {
        match self.links {
            LinkStyle::Server => "/",
            LinkStyle::Static => "/index.html",
        }
    }

    pub fn event_href(&self, event: &Event) -> String {
        match self.links {
            LinkStyle::Server => format!("/events/{}", event.id),
            LinkStyle::Static => format!("/events/{}.html", event.id),
        }
    }
}

/// Link to the listing with `state` applied. Default values are omitted.
pub fn listing_href(state: &ListingState) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if !state.query.is_empty() {
        query.append_pair("q", &state.query);
    }
    if !state.category.is_all() {
        query.append_pair("category", state.category.as_str());
    }
    if !state.location.is_all() {
        query.append_pair("location", state.location.as_str());
    }
    if state.sort != SortKey::Date {
        query.append_pair("sort", state.sort.as_str());
    }
    if state.view_mode != ViewMode::Grid {
        query.append_pair("view", state.view_mode.as_str());
    }

    let query = query.finish();
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub trait Render {
    fn render(&self, ctx: &RenderContext<'_>) -> String;
}

/// One event as a card in the grid or list view
pub struct EventCard<'a> {
    pub event: &'a Event,
    pub view_mode: ViewMode,
}

impl Render for EventCard<'_> {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let e = self.event;
        let href = escape(&ctx.event_href(e));
        let price = escape(&e.price_label(ctx.currency));

        match self.view_mode {
            ViewMode::Grid => format!(
                r#"<article class="event-card grid">
  <header>
    <span class="badge">{category}</span>
    <div class="day">{day}</div>
    <div class="date">{date}</div>
  </header>
  <h3>{title}</h3>
  <p class="description">{description}</p>
  <ul class="meta">
    <li>{time} • {duration}</li>
    <li>{venue}, {location}</li>
    <li>{attendees} expected</li>
  </ul>
  <footer>
    <span class="price">{price}</span>
    <a class="button" href="{href}">View Details</a>
  </footer>
</article>"#,
                category = escape(&e.category),
                day = escape(&e.day),
                date = escape(&e.date),
                title = escape(&e.title),
                description = escape(&e.description),
                time = escape(&e.time),
                duration = escape(&e.duration),
                venue = escape(&e.venue),
                location = escape(&e.location),
                attendees = escape(&e.attendees),
            ),
            ViewMode::List => {
                let badge = match e.date_badge() {
                    Some((month, day)) => format!(
                        r#"<div class="date-badge"><span class="month">{month}</span><span class="day">{day}</span></div>"#
                    ),
                    None => format!(r#"<div class="date-badge">{}</div>"#, escape(&e.date)),
                };

                format!(
                    r#"<article class="event-card list">
  {badge}
  <div class="content">
    <span class="badge">{category}</span>
    <h3>{title}</h3>
    <p class="description">{description}</p>
    <ul class="meta">
      <li>{time}</li>
      <li>{location}</li>
      <li>{attendees}</li>
    </ul>
    <footer>
      <span class="price">{price}</span>
      <a class="button" href="{href}">View Details</a>
    </footer>
  </div>
</article>"#,
                    category = escape(&e.category),
                    title = escape(&e.title),
                    description = escape(&e.description),
                    time = escape(&e.time),
                    location = escape(&e.location),
                    attendees = escape(&e.attendees),
                )
            }
        }
    }
}

fn select(name: &str, options: &[FacetOption], selected: &str) -> String {
    let mut html = format!(r#"<select name="{name}">"#);
    for option in options {
        let marker = if option.value == selected { " selected" } else { "" };
        let _ = write!(
            html,
            r#"<option value="{}"{marker}>{}</option>"#,
            escape(&option.value),
            escape(&option.label)
        );
    }
    html.push_str("</select>");
    html
}

fn hidden(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{name}" value="{}">"#,
        escape(value)
    )
}

fn listing_controls(state: &ListingState, ctx: &RenderContext<'_>) -> String {
    let events = ctx.catalog.events();
    let mut html = String::from(r#"<form class="controls" method="get" action="/">"#);

    if !state.query.is_empty() {
        html.push_str(&hidden("q", &state.query));
    }
    if !state.location.is_all() {
        html.push_str(&hidden("location", state.location.as_str()));
    }
    html.push_str(&select(
        "category",
        &facets::category_options(events),
        state.category.as_str(),
    ));
    html.push_str(&select(
        "sort",
        &facets::sort_options(),
        state.sort.as_str(),
    ));
    html.push_str(&hidden("view", state.view_mode.as_str()));
    html.push_str(r#"<button type="submit">Apply</button></form>"#);

    let _ = write!(
        html,
        r#"<div class="view-toggle"><a class="{}" href="{}">Grid</a><a class="{}" href="{}">List</a></div>"#,
        if state.view_mode == ViewMode::Grid { "active" } else { "" },
        escape(&listing_href(&state.with_view_mode(ViewMode::Grid))),
        if state.view_mode == ViewMode::List { "active" } else { "" },
        escape(&listing_href(&state.with_view_mode(ViewMode::List))),
    );
    html
}

impl Render for Listing<'_> {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let state = &self.state;
        let mut html = String::from(
            r#"<section class="events" id="events">
<div class="section-header"><h2>Upcoming Events</h2>"#,
        );

        if ctx.interactive() {
            html.push_str(&listing_controls(state, ctx));
        }
        html.push_str("</div>\n");

        let active = state.active_filters();
        if ctx.interactive() && !active.is_empty() {
            html.push_str(r#"<div class="active-filters">"#);
            for filter in &active {
                let _ = write!(
                    html,
                    r#"<a class="chip" href="{}">{} ×</a>"#,
                    escape(&listing_href(&state.without(filter))),
                    escape(&filter.to_string())
                );
            }
            html.push_str("</div>\n");
        }

        let _ = writeln!(html, r#"<p class="summary">{}</p>"#, escape(&self.summary()));

        if self.is_empty() {
            let _ = write!(
                html,
                r#"<div class="empty-state"><h3>No events found</h3><p>{}</p>"#,
                escape(&self.empty_message())
            );
            if ctx.interactive() {
                for filter in &active {
                    let _ = write!(
                        html,
                        r#"<a class="button" href="{}">{}</a>"#,
                        escape(&listing_href(&state.without(filter))),
                        filter.clear_label()
                    );
                }
            }
            html.push_str("</div>\n");
        } else {
            let _ = writeln!(html, r#"<div class="event-{}">"#, state.view_mode.as_str());
            for event in self.events.iter().copied() {
                let card = EventCard {
                    event,
                    view_mode: state.view_mode,
                };
                html.push_str(&card.render(ctx));
                html.push('\n');
            }
            html.push_str("</div>\n");
        }

        html.push_str("</section>");
        html
    }
}

/// The detail page body for one event
pub struct EventDetail<'a>(pub &'a Event);

impl Render for EventDetail<'_> {
    fn render(&self, ctx: &RenderContext<'_>) -> String {
        let e = self.0;

        let highlights = if e.highlights().is_empty() {
            String::new()
        } else {
            let items: String = e
                .highlights()
                .iter()
                .map(|h| format!("<li>{}</li>", escape(h)))
                .collect();
            format!(r#"<h3>What You'll Get</h3><ul class="highlights">{items}</ul>"#)
        };

        let initial = e
            .organizer_initial()
            .map(|c| escape(&c.to_string()))
            .unwrap_or_default();

        format!(
            r#"<section class="event-hero">
  <a class="back" href="{home}">← Back to Events</a>
  <span class="badge">{category}</span>
  <h1>{title}</h1>
  <p class="description">{description}</p>
  <ul class="meta">
    <li>{date} • {time}</li>
    <li>{venue}, {location}</li>
    <li>{attendees} expected</li>
  </ul>
</section>
<div class="event-content">
  <div class="main">
    <section class="card">
      <h2>About This Event</h2>
      <p>{full_description}</p>
      {highlights}
    </section>
    <section class="card organizer">
      <h2>Event Organizer</h2>
      <div class="avatar">{initial}</div>
      <div>
        <h3>{organizer}</h3>
        <p>Event Organizer</p>
        <p class="contact">{contact}</p>
      </div>
    </section>
  </div>
  <aside class="card booking">
    <div class="price">{price}</div>
    <p>per person</p>
    <dl>
      <dt>Date</dt><dd>{date}</dd>
      <dt>Time</dt><dd>{time}</dd>
      <dt>Duration</dt><dd>{duration}</dd>
      <dt>Attendees</dt><dd>{attendees}</dd>
    </dl>
    <button class="register">{register}</button>
    <button>Save</button>
    <button>Share</button>
  </aside>
</div>"#,
            home = ctx.home_href(),
            category = escape(&e.category),
            title = escape(&e.title),
            description = escape(&e.description),
            date = escape(&e.date),
            time = escape(&e.time),
            venue = escape(&e.venue),
            location = escape(&e.location),
            attendees = escape(&e.attendees),
            full_description = escape(&e.full_description),
            organizer = escape(&e.organizer),
            contact = escape(&e.contact),
            price = escape(&e.price_label(ctx.currency)),
            register = escape(&e.register_label(ctx.currency)),
            duration = escape(&e.duration),
        )
    }
}

const HERO: &str = r##"<section class="hero">
  <p class="tagline">Discover trending events near you</p>
  <h1>Find Your Next <span>Amazing Event</span></h1>
  <p>Discover concerts, workshops, conferences, and meetups happening in your city.</p>
  <a class="button" href="#events">Explore Events</a>
</section>"##;

fn navbar(ctx: &RenderContext<'_>, state: Option<&ListingState>) -> String {
    let search = if ctx.interactive() {
        let mut form = String::from(r#"<form class="search" method="get" action="/">"#);
        let query = state.map(|s| s.query.as_str()).unwrap_or_default();
        let _ = write!(
            form,
            r#"<input type="search" name="q" placeholder="Search events..." value="{}">"#,
            escape(query)
        );
        if let Some(state) = state {
            if !state.category.is_all() {
                form.push_str(&hidden("category", state.category.as_str()));
            }
            if !state.location.is_all() {
                form.push_str(&hidden("location", state.location.as_str()));
            }
            if state.sort != SortKey::Date {
                form.push_str(&hidden("sort", state.sort.as_str()));
            }
            if state.view_mode != ViewMode::Grid {
                form.push_str(&hidden("view", state.view_mode.as_str()));
            }
        }
        form.push_str("</form>");
        form
    } else {
        String::new()
    };

    format!(
        r#"<nav class="navbar">
  <a class="logo" href="{home}"><span class="mark">E</span> {SITE_NAME}</a>
  {search}
  <details class="mobile-menu">
    <summary>Menu</summary>
    {search}
  </details>
</nav>"#,
        home = ctx.home_href(),
    )
}

fn layout(title: &str, nav: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
{nav}
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn listing_page(listing: &Listing<'_>, ctx: &RenderContext<'_>) -> String {
    let nav = navbar(ctx, Some(&listing.state));
    let body = format!("{HERO}\n{}", listing.render(ctx));
    layout(SITE_NAME, &nav, &body)
}

pub fn detail_page(event: &Event, ctx: &RenderContext<'_>) -> String {
    let nav = navbar(ctx, None);
    layout(&event.page_title(), &nav, &EventDetail(event).render(ctx))
}

pub fn not_found_page(ctx: &RenderContext<'_>) -> String {
    let body = format!(
        r#"<section class="not-found">
  <h1>404</h1>
  <h2>Event Not Found</h2>
  <p>Sorry, we couldn't find the event you're looking for. It may have been moved or deleted.</p>
  <a class="button" href="{}">Back to Events</a>
</section>"#,
        ctx.home_href()
    );
    layout("Event Not Found", &navbar(ctx, None), &body)
}
