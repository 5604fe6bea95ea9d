// caffe/src/flow/definition.rs

//! The `Flow<TData, Err>` struct and its construction.

use crate::flow::shared::Shared;
use crate::flow::control::StepControl;
use crate::flow::step::StepDef;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

/// A step handler.
///
/// Takes a clone of the flow's shared context and resolves to a
/// `StepControl` or the flow's error type. Handlers must drop any lock guard
/// on the context before they `.await`.
pub type Handler<TData, Err> =
  Box<dyn Fn(Shared<TData>) -> Pin<Box<dyn Future<Output = Result<StepControl, Err>> + Send>> + Send + Sync>;

/// An ordered list of named steps, each with `before`, `on` and `after`
/// handlers, run against a `Shared<TData>` context.
///
/// `Err` must be constructible from `CafeError` so the engine can report
/// configuration problems (a required step with no handler) in the flow's
/// own error type.
pub struct Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<crate::error::CafeError> + Send + Sync + 'static,
{
  pub(crate) name: &'static str,
  pub(crate) steps: Vec<StepDef>,

  pub(crate) before: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) after: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<crate::error::CafeError> + Send + Sync + 'static,
{
  /// Creates a flow from `(step_name, optional)` pairs, in execution order.
  pub fn new(name: &'static str, step_defs: &[(&str, bool)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(step_name, optional)| StepDef {
        name: (*step_name).to_string(),
        optional: *optional,
      })
      .collect();

    Self {
      name,
      steps,
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    }
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn step_names(&self) -> impl Iterator<Item = &str> {
    self.steps.iter().map(|s| s.name.as_str())
  }

  /// Panics if the step is unknown. Flows are wired once at startup with
  /// literal step names, so a miss here is a typo, not a runtime condition.
  pub(crate) fn ensure_step_exists(&self, step_name: &str) {
    if !self.steps.iter().any(|s| s.name == step_name) {
      panic!("Flow '{}' setup error: step '{}' is not defined.", self.name, step_name);
    }
  }

  pub(crate) fn has_handlers(&self, step_name: &str) -> bool {
    [&self.before, &self.on, &self.after]
      .iter()
      .any(|phase| phase.get(step_name).is_some_and(|handlers| !handlers.is_empty()))
  }
}

impl<TData, Err> std::fmt::Debug for Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<crate::error::CafeError> + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Flow")
      .field("name", &self.name)
      .field("steps", &self.steps)
      .finish_non_exhaustive()
  }
}
