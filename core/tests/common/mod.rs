// tests/common/mod.rs
#![allow(dead_code)] // Each test binary uses a different subset

use async_trait::async_trait;
use caffe::{
  Cafe, CafeError, CafeResult, ItemId, MenuItem, OrderReceipt, OrderRequest, ReservationRequest, StorefrontApi,
};
use rust_decimal::Decimal;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc, Mutex,
};
use tokio::sync::Notify;
use tracing::Level;

// --- Scripted replies ---
#[derive(Clone, Debug)]
pub enum Reply<T> {
  Ok(T),
  Network,
  Status(u16),
}

impl<T> Reply<T> {
  fn into_result(self) -> CafeResult<T> {
    match self {
      Reply::Ok(v) => Ok(v),
      Reply::Network => Err(CafeError::Network("connection refused".to_string())),
      Reply::Status(status) => Err(CafeError::Server {
        status,
        body: "scripted failure".to_string(),
      }),
    }
  }
}

/// In-memory `StorefrontApi` that records what it was sent.
pub struct FakeApi {
  cafes: Reply<Vec<Cafe>>,
  menu: Reply<Vec<MenuItem>>,
  order: Reply<OrderReceipt>,
  reservation: Reply<()>,
  order_gate: Option<Arc<Notify>>,
  pub orders: Mutex<Vec<OrderRequest>>,
  pub reservations: Mutex<Vec<ReservationRequest>>,
  pub catalog_calls: AtomicUsize,
}

impl FakeApi {
  pub fn new() -> Self {
    FakeApi {
      cafes: Reply::Ok(vec![]),
      menu: Reply::Ok(vec![]),
      order: Reply::Ok(OrderReceipt { total: Decimal::ZERO }),
      reservation: Reply::Ok(()),
      order_gate: None,
      orders: Mutex::new(vec![]),
      reservations: Mutex::new(vec![]),
      catalog_calls: AtomicUsize::new(0),
    }
  }

  pub fn with_cafes(mut self, reply: Reply<Vec<Cafe>>) -> Self {
    self.cafes = reply;
    self
  }

  pub fn with_menu(mut self, reply: Reply<Vec<MenuItem>>) -> Self {
    self.menu = reply;
    self
  }

  pub fn with_order(mut self, reply: Reply<OrderReceipt>) -> Self {
    self.order = reply;
    self
  }

  pub fn with_reservation(mut self, reply: Reply<()>) -> Self {
    self.reservation = reply;
    self
  }

  /// `place_order` waits for `gate` to be notified before answering.
  pub fn with_order_gate(mut self, gate: Arc<Notify>) -> Self {
    self.order_gate = Some(gate);
    self
  }

  pub fn order_count(&self) -> usize {
    self.orders.lock().unwrap().len()
  }
}

#[async_trait]
impl StorefrontApi for FakeApi {
  async fn fetch_cafes(&self) -> CafeResult<Vec<Cafe>> {
    self.catalog_calls.fetch_add(1, Ordering::SeqCst);
    self.cafes.clone().into_result()
  }

  async fn fetch_menu(&self) -> CafeResult<Vec<MenuItem>> {
    self.catalog_calls.fetch_add(1, Ordering::SeqCst);
    self.menu.clone().into_result()
  }

  async fn place_order(&self, order: &OrderRequest) -> CafeResult<OrderReceipt> {
    self.orders.lock().unwrap().push(order.clone());
    if let Some(gate) = &self.order_gate {
      gate.notified().await;
    }
    self.order.clone().into_result()
  }

  async fn request_reservation(&self, reservation: &ReservationRequest) -> CafeResult<()> {
    self.reservations.lock().unwrap().push(reservation.clone());
    self.reservation.clone().into_result()
  }
}

// --- Fixtures ---
pub fn menu_item(id: i64, name: &str, cents: i64) -> MenuItem {
  MenuItem {
    id: ItemId::Number(id),
    name: name.to_string(),
    description: format!("{name} from the test menu"),
    price: Decimal::new(cents, 2),
    category: None,
    image_url: None,
  }
}

pub fn cafe(name: &str) -> Cafe {
  Cafe {
    name: Some(name.to_string()),
    ..Cafe::default()
  }
}

pub fn dollars(cents: i64) -> Decimal {
  Decimal::new(cents, 2)
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
