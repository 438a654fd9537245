/// Facet value meaning "no restriction".
pub const ALL: &str = "all";

/// Site name used in page titles.
pub const SITE_NAME: &str = "EventHub";

pub const DEFAULT_CURRENCY: &str = "₹";
