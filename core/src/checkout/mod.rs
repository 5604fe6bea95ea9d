// caffe/src/checkout/mod.rs

pub mod flow;
pub mod order;
pub mod phase;

pub use order::{Customer, OrderLine, OrderReceipt, OrderRequest};
pub use phase::{CheckoutPhase, Settlement};
