// caffe/src/session/reducer.rs

//! State transitions of the storefront. Each function reads the current
//! state and returns the next one; the session swaps it in under its lock.

use crate::catalog::{Cafe, ItemId, MenuItem};
use crate::checkout::{CheckoutPhase, Settlement};
use crate::error::{CafeError, CafeResult};
use crate::session::state::StorefrontState;
use crate::session::tab::Tab;
use tracing::debug;

pub fn select_tab(state: &StorefrontState, tab: Tab) -> StorefrontState {
  StorefrontState { tab, ..state.clone() }
}

/// Adds one unit of `item` and brings the cart view forward.
pub fn add(state: &StorefrontState, item: &MenuItem) -> CafeResult<StorefrontState> {
  ensure_not_submitting(state)?;
  Ok(StorefrontState {
    tab: Tab::Cart,
    cart: state.cart.with_added(item),
    ..state.clone()
  })
}

pub fn increment(state: &StorefrontState, id: &ItemId) -> CafeResult<StorefrontState> {
  ensure_not_submitting(state)?;
  Ok(StorefrontState {
    cart: state.cart.with_incremented(id),
    ..state.clone()
  })
}

pub fn decrement(state: &StorefrontState, id: &ItemId) -> CafeResult<StorefrontState> {
  ensure_not_submitting(state)?;
  Ok(StorefrontState {
    cart: state.cart.with_decremented(id),
    ..state.clone()
  })
}

/// `Idle → Submitting`. `Ok(None)` for an empty cart, which is a no-op.
pub fn begin_checkout(state: &StorefrontState) -> CafeResult<Option<StorefrontState>> {
  ensure_not_submitting(state)?;
  if state.cart.is_empty() {
    return Ok(None);
  }
  Ok(Some(StorefrontState {
    checkout: CheckoutPhase::Submitting,
    ..state.clone()
  }))
}

/// `Submitting → Idle`. Only a placed order clears the cart.
pub fn settle(state: &StorefrontState, settlement: Settlement) -> StorefrontState {
  let cart = match settlement {
    Settlement::Placed { .. } => Default::default(),
    Settlement::Failed { .. } => state.cart.clone(),
  };
  StorefrontState {
    cart,
    checkout: CheckoutPhase::Idle,
    last_settlement: Some(settlement),
    ..state.clone()
  }
}

/// Applies whichever catalog fetches succeeded. A `None` leaves that part of
/// the state as it was.
pub fn catalog_loaded(
  state: &StorefrontState,
  cafes: Option<Vec<Cafe>>,
  menu: Option<Vec<MenuItem>>,
) -> StorefrontState {
  let mut next = state.clone();
  if let Some(cafes) = cafes {
    next.cafe = cafes.into_iter().next();
  }
  if let Some(menu) = menu {
    next.menu = menu;
  }
  next
}

fn ensure_not_submitting(state: &StorefrontState) -> CafeResult<()> {
  if state.is_submitting() {
    debug!("Rejecting cart change while a checkout is in flight.");
    return Err(CafeError::Busy);
  }
  Ok(())
}
