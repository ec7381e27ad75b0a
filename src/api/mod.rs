//! Boundary to the remote ordering backend.
//!
//! [`Backend`] is the three-call contract the core depends on. Every call
//! returns a [`Result`](crate::Result) and never falls back by itself: the
//! catalog store, totals engine and order lifecycle decide what to do with a
//! failure.

pub mod http;
pub mod offline;

use async_trait::async_trait;

use crate::Result;
use crate::models::{Item, OrderId, SelectionEntry, Totals};

pub use http::HttpBackend;
pub use offline::OfflineBackend;

/// Remote collaborator serving the catalog, totals and order endpoints.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetches the raw ingredient list (`GET /ingredients`).
    async fn fetch_catalog(&self) -> Result<Vec<Item>>;

    /// Asks the backend for totals of a selection (`POST /calculate`).
    async fn compute_totals(&self, items: &[SelectionEntry]) -> Result<Totals>;

    /// Submits an order and returns its id (`POST /order`).
    async fn submit_order(&self, items: &[SelectionEntry], totals: &Totals) -> Result<OrderId>;

    /// Short human-readable description for the status bar.
    fn describe(&self) -> String;
}
