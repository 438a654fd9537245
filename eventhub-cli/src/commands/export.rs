//! Pre-render the site: the listing, one page per event and the 404 page.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use eventhub_core::Catalog;
use eventhub_core::listing::ListingState;
use eventhub_server::render::{self, RenderContext};
use owo_colors::OwoColorize;

pub fn run(catalog: &Catalog, out: &Path, currency: &str) -> Result<()> {
    let written = export_site(catalog, out, currency)?;
    println!(
        "{} {} pages to {}",
        "Exported".green(),
        written,
        out.display()
    );
    Ok(())
}

/// Write the static site into `out`, returning the number of pages written.
pub fn export_site(catalog: &Catalog, out: &Path, currency: &str) -> Result<usize> {
    let ctx = RenderContext::static_site(catalog, currency);
    let events_dir = out.join("events");
    fs::create_dir_all(&events_dir)
        .with_context(|| format!("Could not create {}", events_dir.display()))?;

    let listing = ListingState::default().apply(catalog);
    write_page(&out.join("index.html"), &render::listing_page(&listing, &ctx))?;

    for event in catalog.events() {
        let path = events_dir.join(format!("{}.html", event.id));
        write_page(&path, &render::detail_page(event, &ctx))?;
    }

    write_page(&out.join("404.html"), &render::not_found_page(&ctx))?;

    Ok(catalog.len() + 2)
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).with_context(|| format!("Could not write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "page written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_every_event_plus_index_and_404() {
        let catalog = Catalog::bundled().unwrap();
        let dir = tempfile::tempdir().unwrap();

        let written = export_site(&catalog, dir.path(), "₹").unwrap();
        assert_eq!(written, catalog.len() + 2);

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains(&format!("Showing {0} of {0} events", catalog.len())));

        for event in catalog.events() {
            let page = dir.path().join("events").join(format!("{}.html", event.id));
            let html = fs::read_to_string(page).unwrap();
            assert!(html.contains("Back to Events"));
            assert!(index.contains(&format!("/events/{}.html", event.id)));
        }

        let not_found = fs::read_to_string(dir.path().join("404.html")).unwrap();
        assert!(not_found.contains("Event Not Found"));
    }
}
