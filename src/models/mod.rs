//! Shared models for the bowl ordering backend.
//!
//! Contains the catalog item type, selection entries, nutrition/price
//! totals, and the request/response bodies exchanged with the
//! `/ingredients`, `/calculate` and `/order` endpoints.

pub mod item;
pub mod order;
pub mod selection;
pub mod totals;

pub use item::{Catalog, Item, ItemId};
pub use order::{CalculateRequest, Order, OrderId, OrderRequest, OrderResponse};
pub use selection::SelectionEntry;
pub use totals::{Totals, TotalsDisplay};

/// Backend endpoints, used in error messages and log fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Ingredients,
    Calculate,
    Order,
}

impl Endpoint {
    /// Returns the request path relative to the API base URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Ingredients => "/ingredients",
            Endpoint::Calculate => "/calculate",
            Endpoint::Order => "/order",
        }
    }
}
