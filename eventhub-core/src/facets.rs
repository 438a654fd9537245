//! Facet values derived from the catalog, for the listing controls.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::constants::ALL;
use crate::event::Event;
use crate::query::SortKey;

/// One entry of a picker: the submitted value and its visible label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

impl FacetOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        FacetOption {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Distinct values of one field, sorted. A value equal to the "all"
/// sentinel cannot be selected as a filter, so it is left out.
fn distinct<'a>(events: &'a [Event], field: impl Fn(&'a Event) -> &'a str) -> Vec<String> {
    events
        .iter()
        .map(field)
        .filter(|value| *value != ALL)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// The "all" sentinel followed by every category, alphabetically.
pub fn categories(events: &[Event]) -> Vec<String> {
    std::iter::once(ALL.to_string())
        .chain(distinct(events, |e| e.category.as_str()))
        .collect()
}

/// Every location, alphabetically.
pub fn locations(events: &[Event]) -> Vec<String> {
    distinct(events, |e| e.location.as_str())
}

pub fn category_options(events: &[Event]) -> Vec<FacetOption> {
    categories(events)
        .into_iter()
        .map(|cat| {
            if cat == ALL {
                FacetOption::new(ALL, "All Categories")
            } else {
                FacetOption::new(cat.clone(), cat)
            }
        })
        .collect()
}

pub fn location_options(events: &[Event]) -> Vec<FacetOption> {
    std::iter::once(FacetOption::new(ALL, "All Locations"))
        .chain(locations(events).into_iter().map(|loc| FacetOption::new(loc.clone(), loc)))
        .collect()
}

pub fn sort_options() -> Vec<FacetOption> {
    SortKey::ALL
        .iter()
        .map(|key| FacetOption::new(key.as_str(), key.label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::sample;

    fn with_category(id: u64, category: &str, location: &str) -> Event {
        let mut event = sample(id, &format!("Event {id}"));
        event.category = category.to_string();
        event.location = location.to_string();
        event
    }

    #[test]
    fn categories_are_deduplicated_sorted_and_prefixed() {
        let events = vec![
            with_category(1, "Music", "Pune"),
            with_category(2, "Tech", "Mumbai"),
            with_category(3, "Music", "Pune"),
        ];
        assert_eq!(categories(&events), ["all", "Music", "Tech"]);
    }

    #[test]
    fn locations_are_deduplicated_and_sorted() {
        let events = vec![
            with_category(1, "Music", "Pune"),
            with_category(2, "Tech", "Mumbai"),
            with_category(3, "Music", "Pune"),
        ];
        assert_eq!(locations(&events), ["Mumbai", "Pune"]);
    }

    #[test]
    fn empty_catalog_still_offers_all() {
        assert_eq!(categories(&[]), ["all"]);
        assert!(locations(&[]).is_empty());
    }

    #[test]
    fn literal_all_category_is_not_duplicated() {
        let events = vec![with_category(1, "all", "Pune"), with_category(2, "Art", "Pune")];
        assert_eq!(categories(&events), ["all", "Art"]);
    }

    #[test]
    fn option_labels() {
        let events = vec![with_category(1, "Music", "Pune")];

        let cats = category_options(&events);
        assert_eq!(cats[0], FacetOption::new("all", "All Categories"));
        assert_eq!(cats[1], FacetOption::new("Music", "Music"));

        let locs = location_options(&events);
        assert_eq!(locs[0].label, "All Locations");
        assert_eq!(locs[1].value, "Pune");

        let labels: Vec<String> = sort_options().into_iter().map(|o| o.label).collect();
        assert_eq!(labels, ["Date", "Price", "Name"]);
    }
}
