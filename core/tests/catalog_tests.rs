// tests/catalog_tests.rs
mod common;

use caffe::{Session, Tab};
use common::*;
use serial_test::serial;
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[tokio::test]
#[serial]
async fn loads_first_cafe_and_menu() {
  setup_tracing();
  let api = Arc::new(
    FakeApi::new()
      .with_cafes(Reply::Ok(vec![cafe("Caffé Blue"), cafe("Second Branch")]))
      .with_menu(Reply::Ok(vec![menu_item(1, "Espresso", 350), menu_item(2, "Latte", 425)])),
  );
  let session = Session::new(api.clone());

  session.load_catalog().await;

  let state = session.snapshot();
  assert_eq!(state.cafe.as_ref().map(|c| c.display_name()), Some("Caffé Blue"));
  assert_eq!(state.menu.len(), 2);
  assert_eq!(state.tab, Tab::About);
  assert_eq!(api.catalog_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
#[serial]
async fn cafe_failure_keeps_the_menu() {
  setup_tracing();
  let api = Arc::new(
    FakeApi::new()
      .with_cafes(Reply::Status(502))
      .with_menu(Reply::Ok(vec![menu_item(1, "Espresso", 350)])),
  );
  let session = Session::new(api);

  session.load_catalog().await;

  let state = session.snapshot();
  assert_eq!(state.cafe, None);
  assert_eq!(state.menu.len(), 1);
}

#[tokio::test]
#[serial]
async fn menu_failure_keeps_the_cafe() {
  setup_tracing();
  let api = Arc::new(
    FakeApi::new()
      .with_cafes(Reply::Ok(vec![cafe("Caffé Blue")]))
      .with_menu(Reply::Network),
  );
  let session = Session::new(api);

  session.load_catalog().await;

  let state = session.snapshot();
  assert!(state.cafe.is_some());
  assert!(state.menu.is_empty());
}

#[tokio::test]
#[serial]
async fn total_failure_is_swallowed() {
  setup_tracing();
  let api = Arc::new(FakeApi::new().with_cafes(Reply::Network).with_menu(Reply::Status(500)));
  let session = Session::new(api);

  session.load_catalog().await;

  let state = session.snapshot();
  assert_eq!(state.cafe, None);
  assert!(state.menu.is_empty());
}

#[tokio::test]
#[serial]
async fn empty_cafe_list_means_no_cafe() {
  setup_tracing();
  let session = Session::new(Arc::new(FakeApi::new()));

  session.load_catalog().await;

  assert_eq!(session.snapshot().cafe, None);
}

#[tokio::test]
#[serial]
async fn loaded_items_can_be_found_and_added() {
  setup_tracing();
  let api = Arc::new(FakeApi::new().with_menu(Reply::Ok(vec![menu_item(3, "Scone", 275)])));
  let session = Session::new(api);
  session.load_catalog().await;

  let scone = session.find_menu_item("3").expect("scone is on the menu");
  session.add(&scone).unwrap();

  assert_eq!(session.total(), dollars(275));
  assert!(session.find_menu_item("4").is_none());
}
