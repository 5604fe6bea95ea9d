// caffe/src/cart/line.rs

use crate::catalog::{ItemId, MenuItem};
use rust_decimal::Decimal;

/// One product-quantity pairing in the session cart.
///
/// The price is captured when the item is first added and never re-read from
/// the catalog. Quantity is at least 1; the cart drops a line instead of
/// letting it reach 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
  id: ItemId,
  name: String,
  price: Decimal,
  quantity: u32,
}

impl CartLine {
  pub(crate) fn first_of(item: &MenuItem) -> Self {
    CartLine {
      id: item.id.clone(),
      name: item.name.clone(),
      price: item.price,
      quantity: 1,
    }
  }

  pub fn id(&self) -> &ItemId {
    &self.id
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn price(&self) -> Decimal {
    self.price
  }

  pub fn quantity(&self) -> u32 {
    self.quantity
  }

  /// `price × quantity`, unrounded.
  pub fn subtotal(&self) -> Decimal {
    self.price * Decimal::from(self.quantity)
  }

  pub(crate) fn incremented(&self) -> Self {
    CartLine {
      quantity: self.quantity.saturating_add(1),
      ..self.clone()
    }
  }

  /// `None` when the line would drop to zero.
  pub(crate) fn decremented(&self) -> Option<Self> {
    (self.quantity > 1).then(|| CartLine {
      quantity: self.quantity - 1,
      ..self.clone()
    })
  }
}
