pub mod export;
pub mod facets;
pub mod list;
pub mod show;
