// caffe/src/flow/execution.rs

//! `Flow::run()`: executes steps in order, phase by phase.

use crate::error::CafeError;
use crate::flow::control::{FlowOutcome, StepControl};
use crate::flow::definition::{Flow, Handler};
use crate::flow::shared::Shared;
use tracing::{event, info_span, instrument, Instrument, Level};

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<CafeError> + Send + Sync + 'static,
{
  /// Runs every step against `ctx`.
  ///
  /// Stops early with `FlowOutcome::Stopped` when a handler asks for it, and
  /// returns the first handler error unchanged. A non-optional step with no
  /// handlers fails with `CafeError::HandlerMissing` converted into `Err`.
  #[instrument(
    name = "Flow::run",
    skip_all,
    fields(flow = self.name, num_steps = self.steps.len()),
    err(Display)
  )]
  pub async fn run(&self, ctx: Shared<TData>) -> Result<FlowOutcome, Err> {
    event!(Level::DEBUG, "Flow starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name = step_def.name.as_str();
      let step_span = info_span!("flow_step", step_name, step_index = step_idx, optional = step_def.optional);

      if !self.has_handlers(step_name) {
        if step_def.optional {
          event!(parent: &step_span, Level::DEBUG, "Optional step has no handlers, skipping.");
          continue;
        }
        event!(parent: &step_span, Level::ERROR, "Non-optional step has no handlers.");
        return Err(Err::from(CafeError::HandlerMissing {
          step_name: step_def.name.clone(),
        }));
      }

      for (phase, handlers) in [("before", &self.before), ("on", &self.on), ("after", &self.after)] {
        let Some(handlers) = handlers.get(step_name) else {
          continue;
        };
        let control = run_phase(phase, handlers, &ctx).instrument(step_span.clone()).await?;
        if control == StepControl::Stop {
          event!(parent: &step_span, Level::INFO, phase, "Flow stopped by a handler.");
          return Ok(FlowOutcome::Stopped);
        }
      }
      event!(parent: &step_span, Level::DEBUG, "Step finished.");
    }

    event!(Level::DEBUG, "Flow completed.");
    Ok(FlowOutcome::Completed)
  }
}

async fn run_phase<TData, Err>(
  phase: &'static str,
  handlers: &[Handler<TData, Err>],
  ctx: &Shared<TData>,
) -> Result<StepControl, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + Send + Sync + 'static,
{
  for (handler_idx, handler_fn) in handlers.iter().enumerate() {
    match handler_fn(ctx.clone()).await {
      Ok(StepControl::Continue) => {}
      Ok(StepControl::Stop) => return Ok(StepControl::Stop),
      Err(e) => {
        event!(Level::ERROR, phase, handler_index = handler_idx, error = %e, "Handler failed.");
        return Err(e);
      }
    }
  }
  Ok(StepControl::Continue)
}
