// caffe/src/session/tab.rs

use std::fmt;

/// The view the user is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
  #[default]
  About,
  Menu,
  Reserve,
  Cart,
}

impl Tab {
  pub const ALL: [Tab; 4] = [Tab::About, Tab::Menu, Tab::Reserve, Tab::Cart];

  pub fn label(self) -> &'static str {
    match self {
      Tab::About => "About",
      Tab::Menu => "Menu",
      Tab::Reserve => "Reserve",
      Tab::Cart => "Cart",
    }
  }
}

impl fmt::Display for Tab {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}
