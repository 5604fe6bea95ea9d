// caffe/src/checkout/flow.rs

//! Checkout: snapshot the cart, submit it, settle.
//!
//! The cart is cleared only after the server acknowledges the order. Any
//! failure leaves it exactly as it was. Nothing is retried, and there is no
//! idempotency key, so resubmitting after a lost response can place the
//! order twice.

use crate::api::StorefrontApi;
use crate::checkout::order::{Customer, OrderReceipt, OrderRequest};
use crate::checkout::phase::Settlement;
use crate::error::{CafeError, CafeResult};
use crate::flow::{Flow, FlowOutcome, Shared, StepControl};
use crate::session::reducer;
use crate::session::StorefrontState;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub const BEGIN_STEP: &str = "begin_checkout";
pub const SUBMIT_STEP: &str = "submit_order";
pub const SETTLE_STEP: &str = "settle_order";

pub struct CheckoutCtxData {
  pub api: Arc<dyn StorefrontApi>,
  pub state: Shared<StorefrontState>,
  pub customer: Customer,
  pub order: Option<OrderRequest>,
  pub receipt: Option<OrderReceipt>,
  /// Set once this run moved the state machine to `Submitting`; it then owns
  /// the transition back.
  pub submitting: bool,
}

impl CheckoutCtxData {
  pub fn new(api: Arc<dyn StorefrontApi>, state: Shared<StorefrontState>, customer: Customer) -> Self {
    CheckoutCtxData {
      api,
      state,
      customer,
      order: None,
      receipt: None,
      submitting: false,
    }
  }
}

pub fn build_checkout_flow() -> Flow<CheckoutCtxData, CafeError> {
  let mut flow: Flow<CheckoutCtxData, CafeError> = Flow::new(
    "checkout",
    &[(BEGIN_STEP, false), (SUBMIT_STEP, false), (SETTLE_STEP, false)],
  );
  flow.on(BEGIN_STEP, begin_checkout);
  flow.on(SUBMIT_STEP, submit_order);
  flow.on(SETTLE_STEP, settle_order);
  flow
}

pub const INTERRUPTED_REASON: &str = "checkout interrupted before the order service answered";

/// Runs the checkout flow and settles a failed attempt.
///
/// `Ok(None)` means the cart was empty and nothing was sent. If the returned
/// future is dropped (a caller timeout, an aborted task) or a handler panics
/// while the order is in flight, the checkout still settles as `Failed`.
#[instrument(name = "checkout::run", skip_all, err(Display))]
pub async fn run_checkout(
  flow: &Flow<CheckoutCtxData, CafeError>,
  ctx: Shared<CheckoutCtxData>,
) -> CafeResult<Option<OrderReceipt>> {
  let mut pending = SettleOnDrop {
    ctx: ctx.clone(),
    armed: true,
  };
  let result = flow.run(ctx.clone()).await;
  pending.armed = false;

  match result {
    Ok(FlowOutcome::Stopped) => Ok(None),
    Ok(FlowOutcome::Completed) => {
      let receipt = ctx.read().receipt.clone();
      receipt
        .map(Some)
        .ok_or_else(|| CafeError::Internal("checkout completed without a receipt".to_string()))
    }
    Err(err) => {
      if settle_failed(&ctx, err.to_string()) {
        warn!(error = %err, "Checkout failed; cart left untouched.");
      }
      Err(err)
    }
  }
}

/// Settles as `Failed` unless the run returned normally.
struct SettleOnDrop {
  ctx: Shared<CheckoutCtxData>,
  armed: bool,
}

impl Drop for SettleOnDrop {
  fn drop(&mut self) {
    if self.armed && settle_failed(&self.ctx, INTERRUPTED_REASON.to_string()) {
      warn!("Checkout interrupted; cart left untouched.");
    }
  }
}

/// `Submitting → Idle` without clearing the cart, if this run owns the
/// transition. Returns whether anything was settled.
fn settle_failed(ctx: &Shared<CheckoutCtxData>, reason: String) -> bool {
  let (submitting, state) = {
    let guard = ctx.read();
    (guard.submitting, guard.state.clone())
  };
  if !submitting {
    return false;
  }
  let mut state_guard = state.write();
  if !state_guard.is_submitting() {
    return false;
  }
  let next = reducer::settle(&state_guard, Settlement::Failed { reason });
  *state_guard = next;
  true
}

async fn begin_checkout(ctx: Shared<CheckoutCtxData>) -> CafeResult<StepControl> {
  let (state, customer) = {
    let guard = ctx.read();
    (guard.state.clone(), guard.customer.clone())
  };

  let order = {
    let mut state_guard = state.write();
    let Some(next) = reducer::begin_checkout(&state_guard)? else {
      info!("Cart is empty; nothing to check out.");
      return Ok(StepControl::Stop);
    };
    *state_guard = next;
    OrderRequest::new(&customer, &state_guard.cart)
  };

  info!(lines = order.items.len(), customer = %order.customer_name, "Checkout submitting.");
  let mut guard = ctx.write();
  guard.order = Some(order);
  guard.submitting = true;
  Ok(StepControl::Continue)
}

#[instrument(name = "checkout::submit_order", skip_all, err(Display))]
async fn submit_order(ctx: Shared<CheckoutCtxData>) -> CafeResult<StepControl> {
  let (api, order) = {
    let guard = ctx.read();
    (guard.api.clone(), guard.order.clone())
  };
  let Some(order) = order else {
    error!("No order snapshot to submit.");
    return Err(CafeError::Internal("order snapshot missing at submit".to_string()));
  };

  let receipt = api.place_order(&order).await?;
  info!(total = %receipt.total, "Order acknowledged.");
  ctx.write().receipt = Some(receipt);
  Ok(StepControl::Continue)
}

async fn settle_order(ctx: Shared<CheckoutCtxData>) -> CafeResult<StepControl> {
  let (state, receipt) = {
    let guard = ctx.read();
    (guard.state.clone(), guard.receipt.clone())
  };
  let Some(receipt) = receipt else {
    return Err(CafeError::Internal("no receipt to settle".to_string()));
  };

  let mut state_guard = state.write();
  let next = reducer::settle(&state_guard, Settlement::Placed { total: receipt.total });
  *state_guard = next;
  Ok(StepControl::Continue)
}
