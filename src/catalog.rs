//! Catalog loading with a built-in fallback.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::Backend;
use crate::models::{Catalog, Endpoint};

/// Where the session catalog came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogSource {
    Remote,
    #[default]
    Fallback,
}

impl CatalogSource {
    pub fn label(&self) -> &'static str {
        match self {
            CatalogSource::Remote => "live menu",
            CatalogSource::Fallback => "offline menu",
        }
    }
}

/// A catalog together with its origin.
#[derive(Clone, Debug)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub source: CatalogSource,
}

/// Loads the session catalog from the backend.
pub struct CatalogStore {
    backend: Arc<dyn Backend>,
}

impl CatalogStore {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Fetches the ingredient list, substituting [`Catalog::fallback`] when
    /// the request fails or the list is not a valid catalog.
    ///
    /// Never fails. Calling it again re-fetches.
    pub async fn load(&self) -> LoadedCatalog {
        let fetched = match self.backend.fetch_catalog().await {
            Ok(items) => Catalog::new(items),
            Err(e) => Err(e),
        };

        match fetched {
            Ok(catalog) => {
                info!(items = catalog.len(), "Catalog loaded from backend");
                LoadedCatalog {
                    catalog,
                    source: CatalogSource::Remote,
                }
            }
            Err(e) => {
                warn!(
                    endpoint = Endpoint::Ingredients.as_str(),
                    error = %e,
                    "Catalog fetch failed, using built-in ingredients"
                );
                LoadedCatalog {
                    catalog: Catalog::fallback(),
                    source: CatalogSource::Fallback,
                }
            }
        }
    }
}
