// caffe/src/reservation/mod.rs

pub mod flow;
pub mod request;

pub use request::{ReservationRequest, DATETIME_LOCAL_FORMAT, DEFAULT_PARTY_SIZE};
