//! Session controller tying catalog, selection, totals and orders together.
//!
//! A [`Session`] is the only owner of mutable ordering state. Each user
//! operation is an `async fn` that mutates the selection, awaits a totals
//! recompute, and publishes a fresh [`SessionView`] to every subscriber.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::Result;
use crate::api::Backend;
use crate::catalog::{CatalogSource, CatalogStore};
use crate::models::{Catalog, Item, ItemId};
use crate::order::{OrderIdSource, OrderLifecycle, OrderOutcome, OrderPolicy, OrderState};
use crate::selection::SelectionModel;
use crate::totals::{ComputedTotals, TotalsEngine, TotalsSource};

/// Number of times each remote call fell back during this session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FallbackStats {
    pub catalog: u32,
    pub totals: u32,
    pub orders: u32,
}

impl FallbackStats {
    pub fn total(&self) -> u32 {
        self.catalog + self.totals + self.orders
    }
}

/// One catalog row as presented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub item: Item,
    pub selected: bool,
    pub qty: u32,
}

/// One selected item as presented in the chip list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChipView {
    pub id: ItemId,
    pub name: String,
    pub qty: u32,
}

/// Read-only snapshot of a session, published after every operation.
#[derive(Clone, Debug, Default)]
pub struct SessionView {
    pub rows: Vec<RowView>,
    pub chips: Vec<ChipView>,
    pub totals: ComputedTotals,
    pub catalog_source: CatalogSource,
    pub order_state: OrderState,
    pub can_submit: bool,
    /// Result of the last submission until it is dismissed.
    pub outcome: Option<OrderOutcome>,
    pub fallbacks: FallbackStats,
    pub backend: String,
    /// Increases with every published view.
    pub revision: u64,
}

/// Session-scoped ordering state.
pub struct Session {
    backend: Arc<dyn Backend>,
    catalog: Catalog,
    catalog_source: CatalogSource,
    selection: SelectionModel,
    engine: TotalsEngine,
    totals: ComputedTotals,
    orders: OrderLifecycle,
    outcome: Option<OrderOutcome>,
    fallbacks: FallbackStats,
    revision: u64,
    updates: watch::Sender<SessionView>,
}

impl Session {
    /// Loads the catalog, computes totals for the empty selection, and
    /// publishes the first view.
    pub async fn start(backend: Arc<dyn Backend>, policy: OrderPolicy) -> Self {
        let loaded = CatalogStore::new(Arc::clone(&backend)).load().await;
        let mut fallbacks = FallbackStats::default();
        if loaded.source == CatalogSource::Fallback {
            fallbacks.catalog += 1;
        }

        let (updates, _) = watch::channel(SessionView::default());
        let mut session = Self {
            selection: SelectionModel::new(&loaded.catalog),
            catalog: loaded.catalog,
            catalog_source: loaded.source,
            engine: TotalsEngine::new(Arc::clone(&backend)),
            totals: ComputedTotals::default(),
            orders: OrderLifecycle::new(Arc::clone(&backend), policy),
            outcome: None,
            fallbacks,
            revision: 0,
            updates,
            backend,
        };
        session.refresh_totals().await;
        session.publish();
        info!(
            items = session.catalog.len(),
            source = session.catalog_source.label(),
            backend = %session.backend.describe(),
            "Session started"
        );
        session
    }

    /// Returns a receiver that always holds the latest view.
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.updates.subscribe()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_source(&self) -> CatalogSource {
        self.catalog_source
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn totals(&self) -> ComputedTotals {
        self.totals
    }

    pub fn order_state(&self) -> OrderState {
        self.orders.state()
    }

    pub fn fallbacks(&self) -> FallbackStats {
        self.fallbacks
    }

    /// Revision of the most recently published view.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn can_submit(&self) -> bool {
        self.orders.can_submit(self.selection.is_empty())
    }

    /// Selects or deselects an item.
    ///
    /// # Errors
    ///
    /// [`BowlError::UnknownItem`](crate::BowlError::UnknownItem) if the id is
    /// not in the catalog.
    pub async fn toggle(&mut self, id: ItemId) -> Result<()> {
        self.selection.toggle(id)?;
        self.after_mutation(true).await;
        Ok(())
    }

    /// Raises an item's quantity by one.
    ///
    /// # Errors
    ///
    /// [`BowlError::UnknownItem`](crate::BowlError::UnknownItem) if the id is
    /// not in the catalog.
    pub async fn increment(&mut self, id: ItemId) -> Result<()> {
        let changed = self.selection.increment(id)?;
        self.after_mutation(changed).await;
        Ok(())
    }

    /// Lowers an item's quantity by one, never below 1.
    ///
    /// # Errors
    ///
    /// [`BowlError::UnknownItem`](crate::BowlError::UnknownItem) if the id is
    /// not in the catalog.
    pub async fn decrement(&mut self, id: ItemId) -> Result<()> {
        let changed = self.selection.decrement(id)?;
        self.after_mutation(changed).await;
        Ok(())
    }

    /// Deselects an item (the chip removal affordance).
    ///
    /// # Errors
    ///
    /// [`BowlError::UnknownItem`](crate::BowlError::UnknownItem) if the id is
    /// not in the catalog.
    pub async fn remove(&mut self, id: ItemId) -> Result<()> {
        let changed = self.selection.remove(id)?;
        self.after_mutation(changed).await;
        Ok(())
    }

    /// Submits the current selection with the current totals.
    ///
    /// On confirmation the selection is cleared and totals are recomputed
    /// for the empty selection. The outcome stays on the view until
    /// [`Session::dismiss_outcome`] is called.
    ///
    /// # Errors
    ///
    /// [`BowlError::EmptySelection`](crate::BowlError::EmptySelection) or
    /// [`BowlError::SubmissionInFlight`](crate::BowlError::SubmissionInFlight);
    /// backend failures never surface here.
    pub async fn submit(&mut self) -> Result<OrderOutcome> {
        let draft = self
            .orders
            .begin(self.selection.snapshot(), self.totals.totals)?;
        self.outcome = None;
        self.publish();

        let result = self.orders.send(&draft).await;
        let outcome = self.orders.finish(draft, result);

        match &outcome {
            OrderOutcome::Confirmed(confirmation) => {
                if confirmation.id_source == OrderIdSource::Generated {
                    self.fallbacks.orders += 1;
                }
                self.selection.clear();
                self.refresh_totals().await;
            }
            OrderOutcome::Failed { .. } => self.fallbacks.orders += 1,
        }

        self.outcome = Some(outcome.clone());
        self.publish();
        Ok(outcome)
    }

    /// Clears the one-shot submission outcome and returns it.
    pub fn dismiss_outcome(&mut self) -> Option<OrderOutcome> {
        let outcome = self.outcome.take();
        if outcome.is_some() {
            self.publish();
        }
        outcome
    }

    /// Builds the current view without publishing it.
    pub fn view(&self) -> SessionView {
        let rows = self
            .selection
            .rows()
            .iter()
            .zip(self.catalog.items())
            .map(|(row, item)| RowView {
                item: item.clone(),
                selected: row.selected,
                qty: row.qty,
            })
            .collect();

        let chips = self
            .selection
            .snapshot()
            .into_iter()
            .filter_map(|entry| {
                self.catalog.get(entry.id).map(|item| ChipView {
                    id: entry.id,
                    name: item.name.clone(),
                    qty: entry.qty,
                })
            })
            .collect();

        SessionView {
            rows,
            chips,
            totals: self.totals,
            catalog_source: self.catalog_source,
            order_state: self.orders.state(),
            can_submit: self.can_submit(),
            outcome: self.outcome.clone(),
            fallbacks: self.fallbacks,
            backend: self.backend.describe(),
            revision: self.revision,
        }
    }

    async fn after_mutation(&mut self, changed: bool) {
        if changed {
            self.refresh_totals().await;
        }
        self.publish();
    }

    async fn refresh_totals(&mut self) {
        let snapshot = self.selection.snapshot();
        self.totals = self.engine.compute(&self.catalog, &snapshot).await;
        if self.totals.source == TotalsSource::Local {
            self.fallbacks.totals += 1;
        }
    }

    fn publish(&mut self) {
        self.revision += 1;
        self.updates.send_replace(self.view());
    }
}
