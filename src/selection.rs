//! Per-item selection flags and quantities.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Catalog, ItemId, SelectionEntry};
use crate::{BowlError, Result};

/// State of one catalog row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowState {
    pub id: ItemId,
    pub selected: bool,
    /// Displayed quantity. Only counts toward totals while `selected`.
    pub qty: u32,
}

impl RowState {
    fn new(id: ItemId) -> Self {
        Self {
            id,
            selected: false,
            qty: 1,
        }
    }

    fn deselect(&mut self) {
        self.selected = false;
        self.qty = 1;
    }
}

/// Tracks which catalog items are selected and in what quantity.
///
/// Rows are kept in catalog order so [`SelectionModel::snapshot`] is ordered
/// by catalog position, not by the order items were picked.
#[derive(Clone, Debug)]
pub struct SelectionModel {
    rows: Vec<RowState>,
    index: HashMap<ItemId, usize>,
}

impl SelectionModel {
    /// Creates an empty selection over every item of `catalog`.
    pub fn new(catalog: &Catalog) -> Self {
        let rows: Vec<RowState> = catalog.items().iter().map(|i| RowState::new(i.id)).collect();
        let index = rows
            .iter()
            .enumerate()
            .map(|(pos, row)| (row.id, pos))
            .collect();
        Self { rows, index }
    }

    fn row_mut(&mut self, id: ItemId) -> Result<&mut RowState> {
        let pos = *self.index.get(&id).ok_or(BowlError::UnknownItem(id))?;
        Ok(&mut self.rows[pos])
    }

    fn row(&self, id: ItemId) -> Option<&RowState> {
        self.index.get(&id).map(|&pos| &self.rows[pos])
    }

    /// Flips the selected flag and returns the new state.
    ///
    /// Selecting starts the quantity at 1; deselecting discards it.
    pub fn toggle(&mut self, id: ItemId) -> Result<bool> {
        let row = self.row_mut(id)?;
        if row.selected {
            row.deselect();
        } else {
            row.selected = true;
            row.qty = 1;
        }
        debug!(id, selected = row.selected, "Toggled item");
        Ok(row.selected)
    }

    /// Raises the quantity by one. Does not select the item.
    ///
    /// Returns `true` only when the [`snapshot`](Self::snapshot) changed,
    /// that is when the row is selected.
    pub fn increment(&mut self, id: ItemId) -> Result<bool> {
        let row = self.row_mut(id)?;
        let before = row.qty;
        row.qty = row.qty.saturating_add(1);
        debug!(id, qty = row.qty, "Incremented quantity");
        Ok(row.selected && row.qty != before)
    }

    /// Lowers the quantity by one, never below 1.
    ///
    /// Returns `true` only when a selected row's quantity went down.
    pub fn decrement(&mut self, id: ItemId) -> Result<bool> {
        let row = self.row_mut(id)?;
        if row.qty <= 1 {
            return Ok(false);
        }
        row.qty -= 1;
        debug!(id, qty = row.qty, "Decremented quantity");
        Ok(row.selected)
    }

    /// Deselects the item. Returns `false` if it was not selected.
    pub fn remove(&mut self, id: ItemId) -> Result<bool> {
        let row = self.row_mut(id)?;
        if !row.selected {
            return Ok(false);
        }
        row.deselect();
        debug!(id, "Removed item");
        Ok(true)
    }

    /// Deselects every item and returns how many were selected.
    pub fn clear(&mut self) -> usize {
        let mut removed = 0;
        for row in &mut self.rows {
            if row.selected {
                removed += 1;
            }
            row.deselect();
        }
        removed
    }

    /// Selected items with their quantities, in catalog order.
    pub fn snapshot(&self) -> Vec<SelectionEntry> {
        self.rows
            .iter()
            .filter(|row| row.selected)
            .map(|row| SelectionEntry::new(row.id, row.qty))
            .collect()
    }

    /// `true` when nothing is selected; submitting is not allowed then.
    pub fn is_empty(&self) -> bool {
        !self.rows.iter().any(|row| row.selected)
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.row(id).is_some_and(|row| row.selected)
    }

    /// Displayed quantity of a row, selected or not.
    pub fn quantity(&self, id: ItemId) -> Option<u32> {
        self.row(id).map(|row| row.qty)
    }

    /// Every row in catalog order.
    pub fn rows(&self) -> &[RowState] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> SelectionModel {
        SelectionModel::new(&Catalog::fallback())
    }

    #[test]
    fn starts_empty() {
        let model = model();
        assert!(model.is_empty());
        assert!(model.snapshot().is_empty());
        assert_eq!(model.rows().len(), 10);
        assert!(model.rows().iter().all(|r| !r.selected && r.qty == 1));
    }

    #[test]
    fn toggle_selects_with_quantity_one() {
        let mut model = model();
        assert!(model.toggle(3).unwrap());
        assert_eq!(model.snapshot(), vec![SelectionEntry::new(3, 1)]);
        assert!(!model.is_empty());
    }

    #[test]
    fn toggle_twice_resets_quantity_tracking() {
        let mut model = model();
        model.toggle(6).unwrap();
        model.increment(6).unwrap();
        model.increment(6).unwrap();
        assert_eq!(model.quantity(6), Some(3));

        assert!(!model.toggle(6).unwrap());
        assert!(model.is_empty());
        assert_eq!(model.quantity(6), Some(1));

        model.toggle(6).unwrap();
        assert_eq!(model.snapshot(), vec![SelectionEntry::new(6, 1)]);
    }

    #[test]
    fn decrement_never_goes_below_one() {
        let mut model = model();
        model.toggle(1).unwrap();
        model.increment(1).unwrap();
        assert!(model.decrement(1).unwrap());
        for _ in 0..5 {
            assert!(!model.decrement(1).unwrap());
        }
        assert_eq!(model.quantity(1), Some(1));
    }

    #[test]
    fn quantity_changes_do_not_select() {
        let mut model = model();
        assert!(!model.increment(2).unwrap());
        assert!(!model.increment(2).unwrap());
        assert_eq!(model.quantity(2), Some(3));
        assert!(!model.is_selected(2));
        assert!(model.snapshot().is_empty());

        assert!(!model.decrement(2).unwrap());
        assert_eq!(model.quantity(2), Some(2));
    }

    #[test]
    fn snapshot_follows_catalog_order() {
        let mut model = model();
        model.toggle(8).unwrap();
        model.toggle(2).unwrap();
        model.toggle(5).unwrap();
        model.increment(8).unwrap();

        let ids: Vec<ItemId> = model.snapshot().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 5, 8]);
        assert_eq!(model.snapshot()[2].qty, 2);
    }

    #[test]
    fn remove_deselects() {
        let mut model = model();
        model.toggle(4).unwrap();
        assert!(model.remove(4).unwrap());
        assert!(!model.remove(4).unwrap());
        assert!(model.is_empty());
    }

    #[test]
    fn clear_removes_every_entry() {
        let mut model = model();
        model.toggle(1).unwrap();
        model.toggle(9).unwrap();
        model.increment(9).unwrap();
        assert_eq!(model.clear(), 2);
        assert!(model.is_empty());
        assert_eq!(model.quantity(9), Some(1));
    }

    #[test]
    fn unknown_item_is_rejected() {
        let mut model = model();
        assert!(matches!(model.toggle(99), Err(BowlError::UnknownItem(99))));
        assert!(matches!(model.increment(0), Err(BowlError::UnknownItem(0))));
        assert!(model.quantity(99).is_none());
    }
}
