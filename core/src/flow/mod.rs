// caffe/src/flow/mod.rs

//! A small async step engine. Catalog loading, checkout and reservation are
//! each a `Flow` over their own context type.

pub mod control;
pub mod definition;
pub mod execution;
pub mod hooks;
pub mod shared;
pub mod step;

pub use control::{FlowOutcome, StepControl};
pub use definition::{Flow, Handler};
pub use shared::Shared;
pub use step::StepDef;
