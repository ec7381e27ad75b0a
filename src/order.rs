//! Order submission state machine.
//!
//! A submission moves `Idle -> Submitting -> Idle` and yields one
//! [`OrderOutcome`]. Under [`OrderPolicy::Lenient`] a failed `/order` call
//! still confirms, with a locally generated id; under
//! [`OrderPolicy::Strict`] it yields [`OrderOutcome::Failed`] instead.

use std::ops::Range;
use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::api::Backend;
use crate::models::{Endpoint, Order, OrderId, SelectionEntry, Totals};
use crate::{BowlError, Result};

/// Range of locally generated order ids.
pub const GENERATED_ORDER_ID_RANGE: Range<OrderId> = 0..1_000_000;

/// What to do when `/order` fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderPolicy {
    /// Confirm anyway with a generated id.
    #[default]
    Lenient,
    /// Report the failure and keep the selection.
    Strict,
}

impl FromStr for OrderPolicy {
    type Err = BowlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(OrderPolicy::Lenient),
            "strict" => Ok(OrderPolicy::Strict),
            other => Err(BowlError::Config(format!(
                "BOWL_ORDER_POLICY must be `lenient` or `strict`, got `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderState {
    #[default]
    Idle,
    Submitting,
}

/// Origin of a confirmed order id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderIdSource {
    Remote,
    Generated,
}

/// A confirmed order, shown once to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub order: Order,
    pub id_source: OrderIdSource,
}

impl Confirmation {
    pub fn order_id(&self) -> OrderId {
        self.order.id
    }

    pub fn total_price(&self) -> Decimal {
        self.order.totals.price
    }
}

/// Result of one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderOutcome {
    Confirmed(Confirmation),
    /// Only produced under [`OrderPolicy::Strict`].
    Failed { reason: String },
}

/// Selection and totals captured when a submission starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderDraft {
    pub items: Vec<SelectionEntry>,
    pub totals: Totals,
}

/// Drives a single submission at a time.
pub struct OrderLifecycle {
    backend: Arc<dyn Backend>,
    policy: OrderPolicy,
    state: OrderState,
}

impl OrderLifecycle {
    pub fn new(backend: Arc<dyn Backend>, policy: OrderPolicy) -> Self {
        Self {
            backend,
            policy,
            state: OrderState::Idle,
        }
    }

    pub fn state(&self) -> OrderState {
        self.state
    }

    /// Submit is enabled only when idle with a non-empty selection.
    pub fn can_submit(&self, selection_is_empty: bool) -> bool {
        self.state == OrderState::Idle && !selection_is_empty
    }

    /// Captures the selection and moves to `Submitting`.
    ///
    /// # Errors
    ///
    /// [`BowlError::SubmissionInFlight`] while another submission is pending,
    /// [`BowlError::EmptySelection`] if `items` is empty.
    pub fn begin(&mut self, items: Vec<SelectionEntry>, totals: Totals) -> Result<OrderDraft> {
        if self.state == OrderState::Submitting {
            return Err(BowlError::SubmissionInFlight);
        }
        if items.is_empty() {
            return Err(BowlError::EmptySelection);
        }
        self.state = OrderState::Submitting;
        Ok(OrderDraft { items, totals })
    }

    /// Sends the draft to the backend.
    pub async fn send(&self, draft: &OrderDraft) -> Result<OrderId> {
        self.backend.submit_order(&draft.items, &draft.totals).await
    }

    /// Resolves the backend answer into an outcome and returns to `Idle`.
    pub fn finish(&mut self, draft: OrderDraft, result: Result<OrderId>) -> OrderOutcome {
        self.state = OrderState::Idle;

        let (id, id_source) = match result {
            Ok(id) => (id, OrderIdSource::Remote),
            Err(e) => {
                warn!(
                    endpoint = Endpoint::Order.as_str(),
                    error = %e,
                    policy = ?self.policy,
                    "Order submission failed"
                );
                match self.policy {
                    OrderPolicy::Lenient => (generated_order_id(), OrderIdSource::Generated),
                    OrderPolicy::Strict => {
                        return OrderOutcome::Failed {
                            reason: e.to_string(),
                        };
                    }
                }
            }
        };

        info!(
            order_id = id,
            source = ?id_source,
            entries = draft.items.len(),
            price = %draft.totals.price,
            "Order confirmed"
        );
        OrderOutcome::Confirmed(Confirmation {
            order: Order {
                id,
                items: draft.items,
                totals: draft.totals,
            },
            id_source,
        })
    }
}

/// Draws a random id from [`GENERATED_ORDER_ID_RANGE`].
fn generated_order_id() -> OrderId {
    rand::thread_rng().gen_range(GENERATED_ORDER_ID_RANGE)
}
