// caffe/src/session/controller.rs

use crate::api::StorefrontApi;
use crate::cart::Cart;
use crate::catalog::flow::{build_catalog_flow, CatalogCtxData};
use crate::catalog::{ItemId, MenuItem};
use crate::checkout::flow::{build_checkout_flow, run_checkout, CheckoutCtxData};
use crate::checkout::{Customer, OrderReceipt};
use crate::error::{CafeError, CafeResult};
use crate::flow::{Flow, Shared};
use crate::reservation::flow::{build_reservation_flow, ReservationCtxData};
use crate::reservation::ReservationRequest;
use crate::session::reducer;
use crate::session::state::StorefrontState;
use crate::session::tab::Tab;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{error, instrument, warn};

/// The single controller of a storefront session.
///
/// Owns the state and is the only writer of the cart. Cloning a `Session`
/// yields another handle to the same state, so a checkout can be awaited on
/// one task while another keeps reading it; edits made while the checkout is
/// in flight are rejected with `CafeError::Busy`.
#[derive(Clone)]
pub struct Session {
  api: Arc<dyn StorefrontApi>,
  state: Shared<StorefrontState>,
  customer: Customer,
  catalog_flow: Arc<Flow<CatalogCtxData, CafeError>>,
  checkout_flow: Arc<Flow<CheckoutCtxData, CafeError>>,
  reservation_flow: Arc<Flow<ReservationCtxData, CafeError>>,
}

impl Session {
  pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
    Session {
      api,
      state: Shared::default(),
      customer: Customer::default(),
      catalog_flow: Arc::new(build_catalog_flow()),
      checkout_flow: Arc::new(build_checkout_flow()),
      reservation_flow: Arc::new(build_reservation_flow()),
    }
  }

  /// Customer used by `checkout()`.
  #[must_use]
  pub fn with_customer(mut self, customer: Customer) -> Self {
    self.customer = customer;
    self
  }

  /// A copy of the current state for rendering.
  pub fn snapshot(&self) -> StorefrontState {
    self.state.read().clone()
  }

  pub fn tab(&self) -> Tab {
    self.state.read().tab
  }

  pub fn cart(&self) -> Cart {
    self.state.map_read(|s| &s.cart).clone()
  }

  pub fn total(&self) -> Decimal {
    self.state.map_read(|s| &s.cart).total()
  }

  /// Menu item whose id renders as `id`.
  pub fn find_menu_item(&self, id: &str) -> Option<MenuItem> {
    self.state.read().menu.iter().find(|item| item.id.to_string() == id).cloned()
  }

  /// Cart line id whose rendering is `id`.
  pub fn find_cart_id(&self, id: &str) -> Option<ItemId> {
    self
      .state
      .read()
      .cart
      .lines()
      .iter()
      .map(|line| line.id())
      .find(|line_id| line_id.to_string() == id)
      .cloned()
  }

  /// Fetches cafés and menu. Never fails: whatever could not be fetched is
  /// logged and left empty.
  #[instrument(name = "Session::load_catalog", skip_all)]
  pub async fn load_catalog(&self) {
    let ctx = Shared::new(CatalogCtxData::new(self.api.clone(), self.state.clone()));
    if let Err(e) = self.catalog_flow.run(ctx).await {
      error!(error = %e, "Catalog load failed.");
    }
  }

  pub fn select_tab(&self, tab: Tab) {
    let mut guard = self.state.write();
    let next = reducer::select_tab(&guard, tab);
    *guard = next;
  }

  pub fn add(&self, item: &MenuItem) -> CafeResult<()> {
    self.apply(|state| reducer::add(state, item))
  }

  pub fn increment(&self, id: &ItemId) -> CafeResult<()> {
    self.apply(|state| reducer::increment(state, id))
  }

  pub fn decrement(&self, id: &ItemId) -> CafeResult<()> {
    self.apply(|state| reducer::decrement(state, id))
  }

  /// Submits the cart as the session's customer.
  ///
  /// `Ok(None)` when the cart is empty (no request is made). On success the
  /// cart is cleared and the server's receipt returned. On failure the cart
  /// is untouched and the error returned. Dropping the future mid-flight
  /// settles the attempt as failed.
  pub async fn checkout(&self) -> CafeResult<Option<OrderReceipt>> {
    self.checkout_as(self.customer.clone()).await
  }

  pub async fn checkout_as(&self, customer: Customer) -> CafeResult<Option<OrderReceipt>> {
    let ctx = Shared::new(CheckoutCtxData::new(self.api.clone(), self.state.clone(), customer));
    run_checkout(&self.checkout_flow, ctx).await
  }

  /// Sends the reservation as-is. On success the about view is selected; on
  /// failure the view stays where it was.
  pub async fn reserve(&self, request: ReservationRequest) -> CafeResult<()> {
    let ctx = Shared::new(ReservationCtxData {
      api: self.api.clone(),
      state: self.state.clone(),
      request,
    });
    self.reservation_flow.run(ctx).await.map(|_| ()).inspect_err(|e| {
      warn!(error = %e, "Reservation failed.");
    })
  }

  fn apply(&self, transition: impl FnOnce(&StorefrontState) -> CafeResult<StorefrontState>) -> CafeResult<()> {
    let mut guard = self.state.write();
    let next = transition(&guard)?;
    *guard = next;
    Ok(())
  }
}

impl std::fmt::Debug for Session {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Session")
      .field("state", &self.state)
      .field("customer", &self.customer)
      .finish_non_exhaustive()
  }
}
