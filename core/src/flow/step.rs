// caffe/src/flow/step.rs

/// A named step of a flow.
///
/// An optional step with no handlers is skipped; a non-optional one fails the
/// run with `CafeError::HandlerMissing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDef {
  pub name: String,
  pub optional: bool,
}
