// caffe/src/cart/store.rs

//! The cart and its reducers. Every operation takes `&Cart` and returns the
//! next `Cart`; nothing here mutates in place.

use crate::cart::line::CartLine;
use crate::catalog::{ItemId, MenuItem};
use crate::checkout::OrderLine;
use rust_decimal::Decimal;

/// Ordered cart lines, first-add order, at most one line per item id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
  lines: Vec<CartLine>,
}

impl Cart {
  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  pub fn line(&self, id: &ItemId) -> Option<&CartLine> {
    self.lines.iter().find(|line| line.id() == id)
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Sum of units across all lines.
  pub fn item_count(&self) -> u32 {
    self.lines.iter().map(CartLine::quantity).sum()
  }

  /// Σ price × quantity, recomputed on every call and never rounded.
  pub fn total(&self) -> Decimal {
    self.lines.iter().map(CartLine::subtotal).sum()
  }

  /// Adds one unit of `item`. An existing line keeps its position and its
  /// captured price; otherwise a new line is appended.
  #[must_use]
  pub fn with_added(&self, item: &MenuItem) -> Cart {
    if self.line(&item.id).is_some() {
      return self.with_incremented(&item.id);
    }
    let mut lines = self.lines.clone();
    lines.push(CartLine::first_of(item));
    Cart { lines }
  }

  /// One more unit of an existing line. Unknown ids are ignored.
  #[must_use]
  pub fn with_incremented(&self, id: &ItemId) -> Cart {
    let lines = self
      .lines
      .iter()
      .map(|line| if line.id() == id { line.incremented() } else { line.clone() })
      .collect();
    Cart { lines }
  }

  /// One less unit; a line at quantity 1 is removed. Unknown ids are ignored.
  #[must_use]
  pub fn with_decremented(&self, id: &ItemId) -> Cart {
    let lines = self
      .lines
      .iter()
      .filter_map(|line| if line.id() == id { line.decremented() } else { Some(line.clone()) })
      .collect();
    Cart { lines }
  }

  /// The `(menu_item_id, quantity)` pairs sent at checkout. Prices stay local.
  pub fn order_lines(&self) -> Vec<OrderLine> {
    self
      .lines
      .iter()
      .map(|line| OrderLine {
        menu_item_id: line.id().clone(),
        quantity: line.quantity(),
      })
      .collect()
  }
}
