// caffe/src/lib.rs

//! Caffé: the client-side core of a café storefront.
//!
//! The core covers:
//!  - A cart of menu items that merges re-adds, drops lines at zero and
//!    totals in full decimal precision.
//!  - Checkout as a small state machine (`Idle → Submitting → Idle`) that
//!    clears the cart only after the order service acknowledges the order.
//!  - Catalog loading and reservation requests against a remote
//!    `StorefrontApi`.
//!  - A `Session` controller that owns all of this state and rejects cart
//!    edits while a checkout is in flight.
//!
//! Multi-step operations run on the `flow` engine: named steps with
//! `before` / `on` / `after` async handlers over a `Shared` context.

pub mod api;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod flow;
pub mod money;
pub mod reservation;
pub mod session;

pub use crate::api::StorefrontApi;
pub use crate::cart::{Cart, CartLine};
pub use crate::catalog::{Cafe, ItemId, MenuItem};
pub use crate::checkout::{CheckoutPhase, Customer, OrderLine, OrderReceipt, OrderRequest, Settlement};
pub use crate::error::{CafeError, CafeResult};
pub use crate::flow::{Flow, FlowOutcome, Shared, StepControl};
pub use crate::money::format_price;
pub use crate::reservation::ReservationRequest;
pub use crate::session::{Session, StorefrontState, Tab};
