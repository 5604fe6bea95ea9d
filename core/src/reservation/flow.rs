// caffe/src/reservation/flow.rs

//! Reservation pass-through: one request, then back to the about view.

use crate::api::StorefrontApi;
use crate::error::{CafeError, CafeResult};
use crate::flow::{Flow, Shared, StepControl};
use crate::reservation::request::ReservationRequest;
use crate::session::reducer;
use crate::session::{StorefrontState, Tab};
use std::sync::Arc;
use tracing::{info, instrument};

pub const SUBMIT_STEP: &str = "submit_reservation";
pub const RETURN_STEP: &str = "return_to_about";

pub struct ReservationCtxData {
  pub api: Arc<dyn StorefrontApi>,
  pub state: Shared<StorefrontState>,
  pub request: ReservationRequest,
}

pub fn build_reservation_flow() -> Flow<ReservationCtxData, CafeError> {
  let mut flow: Flow<ReservationCtxData, CafeError> = Flow::new("reservation", &[(SUBMIT_STEP, false), (RETURN_STEP, false)]);
  flow.on(SUBMIT_STEP, submit_reservation);
  flow.on(RETURN_STEP, return_to_about);
  flow
}

#[instrument(name = "reservation::submit", skip_all, err(Display))]
async fn submit_reservation(ctx: Shared<ReservationCtxData>) -> CafeResult<StepControl> {
  let (api, request) = {
    let guard = ctx.read();
    (guard.api.clone(), guard.request.clone())
  };
  api.request_reservation(&request).await?;
  info!(party_size = request.party_size, datetime = %request.datetime_iso, "Reservation requested.");
  Ok(StepControl::Continue)
}

async fn return_to_about(ctx: Shared<ReservationCtxData>) -> CafeResult<StepControl> {
  let state = ctx.read().state.clone();
  let mut state_guard = state.write();
  let next = reducer::select_tab(&state_guard, Tab::About);
  *state_guard = next;
  Ok(StepControl::Continue)
}
