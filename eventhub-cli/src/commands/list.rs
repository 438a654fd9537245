use anyhow::Result;
use eventhub_core::Catalog;
use eventhub_core::listing::ListingState;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(catalog: &Catalog, state: &ListingState, currency: &str) -> Result<()> {
    let listing = state.apply(catalog);

    if listing.is_empty() {
        println!("{}", "No events found".dimmed());
        println!("{}", listing.empty_message().dimmed());
        return Ok(());
    }

    for event in &listing.events {
        println!("{}", event.render_line(currency));
    }

    println!();
    println!("{}", listing.summary().dimmed());

    Ok(())
}
