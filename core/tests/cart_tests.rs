// tests/cart_tests.rs
mod common;

use caffe::{CartLine, ItemId, Session, Tab};
use common::*;
use std::sync::Arc;

fn session() -> Session {
  setup_tracing();
  Session::new(Arc::new(FakeApi::new()))
}

#[test]
fn quantities_follow_add_counts_per_id() {
  let session = session();
  let adds = [1, 2, 1, 3, 1, 2];
  for id in adds {
    session.add(&menu_item(id, &format!("Item {id}"), 100)).unwrap();
  }

  let cart = session.cart();
  assert_eq!(cart.len(), 3);
  let by_id: Vec<(ItemId, u32)> = cart.lines().iter().map(|l| (l.id().clone(), l.quantity())).collect();
  assert_eq!(
    by_id,
    vec![(ItemId::Number(1), 3), (ItemId::Number(2), 2), (ItemId::Number(3), 1)]
  );
}

#[test]
fn add_brings_the_cart_view_forward() {
  let session = session();
  session.select_tab(Tab::Menu);

  session.add(&menu_item(1, "Espresso", 350)).unwrap();

  assert_eq!(session.tab(), Tab::Cart);
}

#[test]
fn increment_and_decrement_by_id() {
  let session = session();
  session.add(&menu_item(1, "Espresso", 350)).unwrap();
  session.add(&menu_item(2, "Cookie", 125)).unwrap();

  session.increment(&ItemId::Number(2)).unwrap();
  session.increment(&ItemId::Number(2)).unwrap();
  session.decrement(&ItemId::Number(1)).unwrap();

  let cart = session.cart();
  assert!(cart.line(&ItemId::Number(1)).is_none());
  assert_eq!(cart.line(&ItemId::Number(2)).map(CartLine::quantity), Some(3));
}

#[test]
fn edits_on_absent_ids_change_nothing() {
  let session = session();
  session.add(&menu_item(1, "Espresso", 350)).unwrap();
  let before = session.snapshot();

  session.increment(&ItemId::Number(42)).unwrap();
  session.decrement(&ItemId::from("42")).unwrap();

  assert_eq!(session.snapshot(), before);
}

#[test]
fn total_matches_the_worked_example() {
  let session = session();
  let espresso = menu_item(1, "Espresso", 350);
  session.add(&espresso).unwrap();
  session.add(&espresso).unwrap();
  session.add(&menu_item(2, "Cookie", 125)).unwrap();

  assert_eq!(session.total(), dollars(825));
  assert_eq!(caffe::format_price(session.total()), "$8.25");
}

#[test]
fn lookups_match_rendered_ids() {
  let session = session();
  session.add(&menu_item(7, "Mocha", 450)).unwrap();

  assert_eq!(session.find_cart_id("7"), Some(ItemId::Number(7)));
  assert_eq!(session.find_cart_id("8"), None);
}
