// caffe/src/api.rs

//! The remote storefront API as seen by the core. The `storefront` binary
//! provides the HTTP implementation; tests provide fakes.

use crate::catalog::{Cafe, MenuItem};
use crate::checkout::{OrderReceipt, OrderRequest};
use crate::error::CafeResult;
use crate::reservation::ReservationRequest;
use async_trait::async_trait;

pub const CAFES_PATH: &str = "/api/cafes";
pub const MENU_PATH: &str = "/api/menu";
pub const ORDERS_PATH: &str = "/api/orders";
pub const RESERVATIONS_PATH: &str = "/api/reservations";

/// Catalog reads plus order and reservation writes.
///
/// Implementations map transport problems to `CafeError::Network` and
/// non-2xx answers to `CafeError::Server`. They must not retry.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
  /// `GET /api/cafes`.
  async fn fetch_cafes(&self) -> CafeResult<Vec<Cafe>>;

  /// `GET /api/menu`.
  async fn fetch_menu(&self) -> CafeResult<Vec<MenuItem>>;

  /// `POST /api/orders`. Resolves to the server-computed total.
  async fn place_order(&self, order: &OrderRequest) -> CafeResult<OrderReceipt>;

  /// `POST /api/reservations`. Any 2xx is success.
  async fn request_reservation(&self, reservation: &ReservationRequest) -> CafeResult<()>;
}
