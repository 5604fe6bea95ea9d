// caffe/src/catalog/menu_item.rs

use crate::catalog::item_id::ItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A menu entry from `GET /api/menu`. Read-only once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
  pub id: ItemId,
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default, with = "rust_decimal::serde::float")]
  pub price: Decimal,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,
}
