// caffe/src/money.rs

//! Display of prices. Amounts stay in full precision everywhere else; only
//! rendering rounds, to two fraction digits.

use rust_decimal::{Decimal, RoundingStrategy};

pub const DISPLAY_DECIMALS: u32 = 2;

/// `$8.25`, `$4.00`, `$0.13` for 0.125.
pub fn format_price(amount: Decimal) -> String {
  let rounded = amount.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
  format!("${rounded:.2}")
}
