//! Selection entry model.

use serde::{Deserialize, Serialize};

use super::item::ItemId;

/// One selected item and its quantity, in the `{ "id", "qty" }` wire shape
/// used by `/calculate` and `/order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct SelectionEntry {
    pub id: ItemId,
    /// Always at least 1.
    pub qty: u32,
}

impl SelectionEntry {
    pub fn new(id: ItemId, qty: u32) -> Self {
        Self { id, qty: qty.max(1) }
    }
}
