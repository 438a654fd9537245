use anyhow::Result;
use eventhub_core::{Catalog, facets};

pub fn categories(catalog: &Catalog) -> Result<()> {
    for category in facets::categories(catalog.events()) {
        println!("{category}");
    }
    Ok(())
}

pub fn locations(catalog: &Catalog) -> Result<()> {
    for location in facets::locations(catalog.events()) {
        println!("{location}");
    }
    Ok(())
}
