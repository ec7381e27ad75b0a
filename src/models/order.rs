//! Request and response bodies for `/calculate` and `/order`.

use serde::{Deserialize, Serialize};

use super::selection::SelectionEntry;
use super::totals::Totals;

/// Identifier assigned to a submitted order.
pub type OrderId = u64;

/// Body of `POST /calculate`.
#[derive(Debug, Serialize)]
pub struct CalculateRequest<'a> {
    pub items: &'a [SelectionEntry],
}

/// Body of `POST /order`.
#[derive(Debug, Serialize)]
pub struct OrderRequest<'a> {
    pub items: &'a [SelectionEntry],
    pub totals: &'a Totals,
}

/// Response of `POST /order`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    pub order_id: OrderId,
}

/// A selection frozen at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<SelectionEntry>,
    pub totals: Totals,
}
