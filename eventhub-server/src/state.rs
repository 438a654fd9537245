use std::sync::Arc;

use eventhub_core::Catalog;

use crate::render::RenderContext;

/// Shared application state. The catalog is loaded once and only read.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    currency: Arc<str>,
}

impl AppState {
    pub fn new(catalog: Catalog, currency: &str) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            currency: Arc::from(currency),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::server(&self.catalog, &self.currency)
    }
}
