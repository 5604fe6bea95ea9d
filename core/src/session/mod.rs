// caffe/src/session/mod.rs

//! Application state and its controller.

pub mod controller;
pub mod reducer;
pub mod state;
pub mod tab;

pub use controller::Session;
pub use state::StorefrontState;
pub use tab::Tab;
