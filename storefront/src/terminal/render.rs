// storefront/src/terminal/render.rs

//! Plain-text views and notifications.

use caffe::{format_price, Cafe, Cart, MenuItem, StorefrontState, Tab};
use rust_decimal::Decimal;

pub const BRAND: &str = "Caffé Blue";
pub const ABOUT_COFFEE: &str = "We source our beans from sustainable farms and roast in-house for maximum freshness. \
Whether you love bold espresso or smooth pour-over, there's something for everyone.";

pub const RESERVATION_REQUESTED: &str = "Reservation requested!";
pub const RESERVATION_FAILED: &str = "Failed to reserve";
pub const ORDER_FAILED: &str = "Failed to place order. Your cart has been kept.";
pub const EMPTY_CART: &str = "Your cart is empty.";

pub fn order_placed(total: Decimal) -> String {
  format!("Order placed! Total: {}", format_price(total))
}

/// Tab bar with the selected tab in brackets.
pub fn header(selected: Tab) -> String {
  let tabs = Tab::ALL
    .iter()
    .map(|tab| {
      if *tab == selected {
        format!("[{}]", tab.label())
      } else {
        tab.label().to_string()
      }
    })
    .collect::<Vec<_>>()
    .join("  ");
  format!("{BRAND} | {tabs}")
}

pub fn about(cafe: Option<&Cafe>) -> String {
  let fallback = Cafe::default();
  let cafe = cafe.unwrap_or(&fallback);

  let mut lines = vec![
    format!("Welcome to {}", cafe.display_name()),
    cafe.display_description().to_string(),
    format!("Address: {}", cafe.display_place()),
  ];
  if let Some(hours) = cafe.open_hours() {
    lines.push(format!("Hours: {hours}"));
  }
  if let Some(phone) = cafe.phone() {
    lines.push(format!("Phone: {phone}"));
  }
  lines.push(String::new());
  lines.push(format!("About our coffee: {ABOUT_COFFEE}"));
  lines.join("\n")
}

pub fn menu(items: &[MenuItem]) -> String {
  if items.is_empty() {
    return "Menu\nNothing on the menu right now.".to_string();
  }
  let mut out = String::from("Menu");
  for item in items {
    out.push_str(&format!("\n  {:>4}  {:<24} {:>8}", item.id, item.name, format_price(item.price)));
    if let Some(category) = item.category.as_deref() {
      out.push_str(&format!("  ({category})"));
    }
    if !item.description.is_empty() {
      out.push_str("\n        ");
      out.push_str(&item.description);
    }
  }
  out.push_str("\nType 'add <id>' to add an item to your cart.");
  out
}

pub fn cart(cart: &Cart) -> String {
  if cart.is_empty() {
    return format!("Your Cart\n{EMPTY_CART}");
  }
  let mut out = String::from("Your Cart");
  for line in cart.lines() {
    out.push_str(&format!(
      "\n  {:>4}  {:<24} {:>8}  x{}",
      line.id(),
      line.name(),
      format_price(line.price()),
      line.quantity()
    ));
  }
  out.push_str(&format!("\nTotal: {}", format_price(cart.total())));
  out.push_str("\nType 'inc <id>' / 'dec <id>' to change quantities, 'checkout' to place the order.");
  out
}

/// The selected tab's view, under the header.
pub fn view(state: &StorefrontState) -> String {
  let body = match state.tab {
    Tab::About => about(state.cafe.as_ref()),
    Tab::Menu => menu(&state.menu),
    Tab::Reserve => "Reserve a Table".to_string(),
    Tab::Cart => cart(&state.cart),
  };
  format!("{}\n\n{}", header(state.tab), body)
}
