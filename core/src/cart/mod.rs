// caffe/src/cart/mod.rs

//! The client-side cart: ordered lines, merge on re-add, drop at zero.

pub mod line;
pub mod store;

pub use line::CartLine;
pub use store::Cart;
