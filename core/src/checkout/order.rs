// caffe/src/checkout/order.rs

//! Wire shapes of `POST /api/orders`.

use crate::cart::Cart;
use crate::catalog::ItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const WALK_IN_NAME: &str = "Walk-in";

/// Who the order is for. Defaults to an anonymous walk-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
  pub name: String,
  pub contact: String,
}

impl Default for Customer {
  fn default() -> Self {
    Customer {
      name: WALK_IN_NAME.to_string(),
      contact: String::new(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
  pub menu_item_id: ItemId,
  pub quantity: u32,
}

/// Snapshot of the cart as submitted. Prices are left out: the server prices
/// the order itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
  pub customer_name: String,
  pub contact: String,
  pub items: Vec<OrderLine>,
}

impl OrderRequest {
  pub fn new(customer: &Customer, cart: &Cart) -> Self {
    OrderRequest {
      customer_name: customer.name.clone(),
      contact: customer.contact.clone(),
      items: cart.order_lines(),
    }
  }
}

/// The server's acknowledgement. Its total is authoritative and may differ
/// from the cart's local total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
  #[serde(with = "rust_decimal::serde::float")]
  pub total: Decimal,
}
