// caffe/src/checkout/phase.rs

use rust_decimal::Decimal;

/// Where the checkout state machine is.
///
/// `Idle → Submitting` when a non-empty cart is checked out, and back to
/// `Idle` once the attempt settles. There is no cancel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutPhase {
  #[default]
  Idle,
  Submitting,
}

/// Terminal result of one checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
  /// Acknowledged by the server with its computed total. The cart was cleared.
  Placed { total: Decimal },
  /// Network or server failure. The cart was left as it was.
  Failed { reason: String },
}
