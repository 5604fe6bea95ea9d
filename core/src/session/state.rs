// caffe/src/session/state.rs

use crate::cart::Cart;
use crate::catalog::{Cafe, MenuItem};
use crate::checkout::{CheckoutPhase, Settlement};
use crate::session::tab::Tab;

/// Everything the view layer renders. Owned by one `Session` and only changed
/// through the functions in `session::reducer`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorefrontState {
  pub tab: Tab,
  /// First café from the catalog, if the fetch worked and returned any.
  pub cafe: Option<Cafe>,
  pub menu: Vec<MenuItem>,
  pub cart: Cart,
  pub checkout: CheckoutPhase,
  pub last_settlement: Option<Settlement>,
}

impl StorefrontState {
  pub fn is_submitting(&self) -> bool {
    self.checkout == CheckoutPhase::Submitting
  }
}
