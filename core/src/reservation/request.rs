// caffe/src/reservation/request.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of an HTML `datetime-local` value, which is what the API expects in
/// `datetime_iso`.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub const DEFAULT_PARTY_SIZE: u32 = 2;

/// Body of `POST /api/reservations`.
///
/// Sent verbatim. Nothing is validated locally; the reservation service is
/// the judge of what is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
  pub name: String,
  pub contact: String,
  pub party_size: u32,
  pub datetime_iso: String,
  pub notes: String,
}

impl Default for ReservationRequest {
  fn default() -> Self {
    ReservationRequest {
      name: String::new(),
      contact: String::new(),
      party_size: DEFAULT_PARTY_SIZE,
      datetime_iso: String::new(),
      notes: String::new(),
    }
  }
}

impl ReservationRequest {
  /// Sets the date-time from a typed value.
  #[must_use]
  pub fn at(mut self, when: NaiveDateTime) -> Self {
    self.datetime_iso = when.format(DATETIME_LOCAL_FORMAT).to_string();
    self
  }
}
