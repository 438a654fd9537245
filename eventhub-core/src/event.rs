//! The event record.
//!
//! Records are read from the catalog as JSON or TOML using camelCase keys
//! (`fullDescription`, `isPaid`) and are never modified afterwards.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::SITE_NAME;

/// A listed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique positive identifier, used in `/events/{id}`
    pub id: u64,
    pub title: String,
    /// Short blurb shown on cards
    pub description: String,
    /// Long text shown on the detail page
    pub full_description: String,

    // Scheduling
    /// Sortable date, normally YYYY-MM-DD
    pub date: String,
    pub day: String,
    pub time: String,
    pub duration: String,

    // Facets
    pub location: String,
    pub venue: String,
    pub category: String,

    // Pricing
    pub is_paid: bool,
    /// Expected to be present exactly when `is_paid` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Display string such as "350+"
    pub attendees: String,
    pub organizer: String,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
}

impl Event {
    /// Price used for ordering; a missing price counts as 0.
    pub fn sort_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// "Free" for free events, otherwise the price behind the currency glyph.
    pub fn price_label(&self, currency: &str) -> String {
        if self.is_paid {
            format!("{}{}", currency, self.sort_price())
        } else {
            "Free".to_string()
        }
    }

    /// Label of the booking button on the detail page.
    pub fn register_label(&self, currency: &str) -> String {
        format!("Register for {}", self.price_label(currency))
    }

    /// Whether `price` is present exactly when `is_paid` is set.
    pub fn has_consistent_pricing(&self) -> bool {
        self.is_paid == self.price.is_some()
    }

    /// `<title>` of the detail page
    pub fn page_title(&self) -> String {
        format!("{} - {}", self.title, SITE_NAME)
    }

    pub fn organizer_initial(&self) -> Option<char> {
        self.organizer.chars().next()
    }

    pub fn highlights(&self) -> &[String] {
        self.highlights.as_deref().unwrap_or_default()
    }

    /// Parse `date` as a calendar date, if it is in YYYY-MM-DD form.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Short month and day of month for the list-view badge (e.g. "Mar", 22).
    pub fn date_badge(&self) -> Option<(String, u32)> {
        use chrono::Datelike;

        let date = self.calendar_date()?;
        Some((date.format("%b").to_string(), date.day()))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
