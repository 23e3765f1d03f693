//! Order placement and the simulated fulfillment lifecycle.
//!
//! Placing an order snapshots the cart, adds the flat delivery surcharge,
//! and schedules a scripted stage progression. The progression is fake demo
//! behavior: stages advance on fixed timers (+5 s, +15 s, +30 s after
//! placement), standing in for a real kitchen/courier integration that does
//! not exist. It must not be mistaken for a fulfillment signal.
//!
//! The schedule is cancellable: placing a new order or clearing the active
//! one aborts any pending transitions, so a stale timer can never mutate a
//! newer order.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use och_qolma_core::{OrderId, OrderStage, PaymentMethod, Som};

use crate::cart::{Cart, CartLine};

/// Flat delivery surcharge added once per order, not per item.
pub const DELIVERY_FEE: Som = Som::new(15_000);

/// Scripted delays from placement to each stage transition.
///
/// Received -> Preparing at +5 s, -> Enroute at +15 s, -> Delivered at
/// +30 s. The final transition is deliberate: the original demo left
/// `delivered` unreachable.
const STAGE_DELAYS: [Duration; 3] = [
    Duration::from_secs(5),
    Duration::from_secs(15),
    Duration::from_secs(30),
];

/// Length of the random part of an order code (`OCH-XXXXX`).
const ORDER_CODE_LEN: usize = 5;

/// Errors that can occur in the order lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// Placement requires a non-empty cart.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,
}

/// Checkout details collected before placement.
#[derive(Debug, Clone)]
pub struct Checkout {
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    pub is_pre_order: bool,
    pub pre_order_time: Option<String>,
}

/// A placed order.
///
/// Immutable except for `stage`, which only ever advances one step at a
/// time via [`OrderStage::next`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub stage: OrderStage,
    pub created_at: DateTime<Utc>,
    /// Snapshot of the cart at placement time.
    pub lines: Vec<CartLine>,
    /// Cart total plus [`DELIVERY_FEE`].
    pub total: Som,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    pub is_pre_order: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_order_time: Option<String>,
}

/// Owns the zero-or-one active order and its scripted stage schedule.
///
/// There is exactly one logical writer (the user session); the shared
/// handle exists only so the timer task can advance the stage.
#[derive(Debug)]
pub struct OrderDesk {
    active: Arc<RwLock<Option<Order>>>,
    schedule: Option<JoinHandle<()>>,
}

impl OrderDesk {
    /// Create a desk with no active order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: Arc::new(RwLock::new(None)),
            schedule: None,
        }
    }

    /// Convert the cart into a placed order and start the simulated
    /// fulfillment schedule.
    ///
    /// On success the cart is emptied, the order starts in
    /// [`OrderStage::Received`], and any schedule left over from a previous
    /// order is cancelled before the new one is started.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] if the cart has no lines; the cart
    /// is left untouched in that case.
    #[instrument(skip(self, cart, checkout), fields(lines = cart.len()))]
    pub async fn place(&mut self, cart: &mut Cart, checkout: Checkout) -> Result<Order, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let order = Order {
            id: generate_order_id(),
            stage: OrderStage::Received,
            created_at: Utc::now(),
            lines: cart.lines().to_vec(),
            total: cart.total().saturating_add(DELIVERY_FEE),
            delivery_address: checkout.delivery_address,
            payment_method: checkout.payment_method,
            is_pre_order: checkout.is_pre_order,
            pre_order_time: checkout.pre_order_time,
        };
        cart.clear();

        info!(order_id = %order.id, total = %order.total, "Order placed");

        self.cancel_schedule();
        *self.active.write().await = Some(order.clone());
        self.schedule = Some(spawn_schedule(Arc::clone(&self.active), order.id.clone()));

        Ok(order)
    }

    /// Advance the active order one stage forward.
    ///
    /// No-op when there is no active order or it is already terminal. The
    /// timer task goes through this same path, so manual and scheduled
    /// advancement cannot disagree.
    pub async fn advance(&self) {
        advance_active(&self.active, None).await;
    }

    /// Snapshot of the active order, if any.
    pub async fn active_order(&self) -> Option<Order> {
        self.active.read().await.clone()
    }

    /// Drop the active order and cancel any pending stage transitions.
    pub async fn clear_active(&mut self) {
        self.cancel_schedule();
        *self.active.write().await = None;
    }

    fn cancel_schedule(&mut self) {
        if let Some(handle) = self.schedule.take() {
            handle.abort();
            debug!("Cancelled pending stage schedule");
        }
    }
}

impl Default for OrderDesk {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OrderDesk {
    fn drop(&mut self) {
        self.cancel_schedule();
    }
}

/// Spawn the scripted stage schedule for a freshly placed order.
fn spawn_schedule(active: Arc<RwLock<Option<Order>>>, order_id: OrderId) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut elapsed = Duration::ZERO;
        for delay in STAGE_DELAYS {
            tokio::time::sleep(delay - elapsed).await;
            elapsed = delay;
            advance_active(&active, Some(&order_id)).await;
        }
    })
}

/// Advance the active order's stage one step forward.
///
/// When `expected_id` is set, the order must still be the one the schedule
/// was started for; the abort in [`OrderDesk::place`] already prevents
/// stale timers, this check keeps the invariant even if a task is mid-poll
/// during replacement.
async fn advance_active(active: &RwLock<Option<Order>>, expected_id: Option<&OrderId>) {
    let mut guard = active.write().await;
    let Some(order) = guard.as_mut() else {
        return;
    };
    if expected_id.is_some_and(|id| id != &order.id) {
        debug!(order_id = %order.id, "Stale schedule tick ignored");
        return;
    }
    if let Some(next) = order.stage.next() {
        info!(order_id = %order.id, from = %order.stage, to = %next, "Order stage advanced");
        order.stage = next;
    }
}

/// Generate a fresh order code: `OCH-` plus 5 random uppercase
/// alphanumerics.
fn generate_order_id() -> OrderId {
    let mut rng = rand::rng();
    let code: String = (0..ORDER_CODE_LEN)
        .map(|_| (rng.sample(Alphanumeric) as char).to_ascii_uppercase())
        .collect();
    OrderId::new(format!("OCH-{code}"))
}
