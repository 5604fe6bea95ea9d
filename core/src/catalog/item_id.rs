// caffe/src/catalog/item_id.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a menu item, as the remote API spells it.
///
/// The API has been seen emitting both integer and string ids. The id keeps
/// the shape it arrived in so `menu_item_id` goes back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
  Number(i64),
  Text(String),
}

impl fmt::Display for ItemId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ItemId::Number(n) => write!(f, "{n}"),
      ItemId::Text(s) => f.write_str(s),
    }
  }
}

impl From<i64> for ItemId {
  fn from(n: i64) -> Self {
    ItemId::Number(n)
  }
}

impl From<&str> for ItemId {
  fn from(s: &str) -> Self {
    ItemId::Text(s.to_string())
  }
}

impl From<String> for ItemId {
  fn from(s: String) -> Self {
    ItemId::Text(s)
  }
}
