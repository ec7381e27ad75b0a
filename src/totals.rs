//! Totals computation: remote first, local summation as fallback.

use std::sync::Arc;

use tracing::warn;

use crate::api::Backend;
use crate::models::{Catalog, Endpoint, SelectionEntry, Totals};

/// Which path produced a [`ComputedTotals`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TotalsSource {
    Remote,
    #[default]
    Local,
}

impl TotalsSource {
    pub fn label(&self) -> &'static str {
        match self {
            TotalsSource::Remote => "server totals",
            TotalsSource::Local => "local totals",
        }
    }
}

/// Totals together with their origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComputedTotals {
    pub totals: Totals,
    pub source: TotalsSource,
}

/// Sums every nutrition and price field of each entry's item times its
/// quantity. Entries whose id is not in `catalog` are skipped; sums that
/// overflow are clamped to [`Decimal::MAX`](rust_decimal::Decimal::MAX).
pub fn local_totals(catalog: &Catalog, entries: &[SelectionEntry]) -> Totals {
    let mut totals = Totals::ZERO;
    for entry in entries {
        match catalog.get(entry.id) {
            Some(item) => {
                if !totals.add_item(item, entry.qty) {
                    warn!(id = entry.id, qty = entry.qty, "Local totals overflowed, clamping");
                }
            }
            None => warn!(id = entry.id, "Skipping unknown item in local totals"),
        }
    }
    totals
}

/// Computes totals for a selection against the backend.
pub struct TotalsEngine {
    backend: Arc<dyn Backend>,
}

impl TotalsEngine {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Asks the backend for totals and returns them verbatim on success.
    /// Any failure falls back to [`local_totals`]; the failure is logged,
    /// never returned.
    pub async fn compute(&self, catalog: &Catalog, entries: &[SelectionEntry]) -> ComputedTotals {
        match self.backend.compute_totals(entries).await {
            Ok(totals) => ComputedTotals {
                totals,
                source: TotalsSource::Remote,
            },
            Err(e) => {
                warn!(
                    endpoint = Endpoint::Calculate.as_str(),
                    error = %e,
                    "Remote totals failed, summing locally"
                );
                ComputedTotals {
                    totals: local_totals(catalog, entries),
                    source: TotalsSource::Local,
                }
            }
        }
    }
}
