// caffe/src/flow/control.rs

//! Signals for controlling flow execution and the outcome of a flow run.

/// Returned by a step handler to say whether the flow should go on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepControl {
  /// Run the remaining handlers of this step, then the next steps.
  Continue,
  /// Halt the flow here. Nothing after this handler runs.
  Stop,
}

/// Outcome of a flow run that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
  /// Every step ran.
  Completed,
  /// A handler returned `StepControl::Stop`.
  Stopped,
}
