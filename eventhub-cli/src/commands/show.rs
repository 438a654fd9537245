use anyhow::Result;
use eventhub_core::Catalog;

use crate::render::Render;

pub fn run(catalog: &Catalog, id: &str, currency: &str) -> Result<()> {
    let Some(event) = catalog.find(id) else {
        anyhow::bail!("Event '{}' not found", id);
    };

    println!("{}", event.render_detail(currency));
    Ok(())
}
