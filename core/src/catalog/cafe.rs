// caffe/src/catalog/cafe.rs

use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "our café";
pub const DEFAULT_DESCRIPTION: &str = "A cozy spot serving specialty coffee, fresh pastries, and warm vibes.";
pub const DEFAULT_PLACE: &str = "123 Bean St, Roast City";

/// Café metadata from `GET /api/cafes`. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub place: Option<String>,
  #[serde(default)]
  pub open_hours: Option<String>,
  #[serde(default)]
  pub phone: Option<String>,
}

impl Cafe {
  pub fn display_name(&self) -> &str {
    non_blank(self.name.as_deref()).unwrap_or(DEFAULT_NAME)
  }

  pub fn display_description(&self) -> &str {
    non_blank(self.description.as_deref()).unwrap_or(DEFAULT_DESCRIPTION)
  }

  pub fn display_place(&self) -> &str {
    non_blank(self.place.as_deref()).unwrap_or(DEFAULT_PLACE)
  }

  /// Opening hours, only when the café actually publishes them.
  pub fn open_hours(&self) -> Option<&str> {
    non_blank(self.open_hours.as_deref())
  }

  pub fn phone(&self) -> Option<&str> {
    non_blank(self.phone.as_deref())
  }
}

// Empty strings fall back like missing ones.
fn non_blank(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn falls_back_on_missing_and_empty_fields() {
    let cafe: Cafe = serde_json::from_str(r#"{"name": "", "phone": "555-0100"}"#).unwrap();

    assert_eq!(cafe.display_name(), DEFAULT_NAME);
    assert_eq!(cafe.display_place(), DEFAULT_PLACE);
    assert_eq!(cafe.open_hours(), None);
    assert_eq!(cafe.phone(), Some("555-0100"));
  }
}
