// caffe/src/catalog/mod.rs

//! Read-only catalog: café metadata and menu items, plus the flow that loads
//! them into the session.

pub mod cafe;
pub mod flow;
pub mod item_id;
pub mod menu_item;

pub use cafe::Cafe;
pub use item_id::ItemId;
pub use menu_item::MenuItem;
