//! Backend used when the network is disabled.

use async_trait::async_trait;

use super::Backend;
use crate::models::{Item, OrderId, SelectionEntry, Totals};
use crate::{BowlError, Result};

/// A backend whose every call fails with [`BowlError::Offline`], so the
/// session runs entirely on the fallback catalog and local totals.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineBackend;

#[async_trait]
impl Backend for OfflineBackend {
    async fn fetch_catalog(&self) -> Result<Vec<Item>> {
        Err(BowlError::Offline)
    }

    async fn compute_totals(&self, _items: &[SelectionEntry]) -> Result<Totals> {
        Err(BowlError::Offline)
    }

    async fn submit_order(&self, _items: &[SelectionEntry], _totals: &Totals) -> Result<OrderId> {
        Err(BowlError::Offline)
    }

    fn describe(&self) -> String {
        "offline".to_string()
    }
}
