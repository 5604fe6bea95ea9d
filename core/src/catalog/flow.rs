// caffe/src/catalog/flow.rs

//! Initial catalog load: cafés and menu fetched side by side, then published
//! into the session state. Failures are logged and swallowed.

use crate::api::StorefrontApi;
use crate::catalog::{Cafe, MenuItem};
use crate::error::{CafeError, CafeResult};
use crate::flow::{Flow, Shared, StepControl};
use crate::session::reducer;
use crate::session::StorefrontState;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const FETCH_STEP: &str = "fetch_catalog";
pub const PUBLISH_STEP: &str = "publish_catalog";

pub struct CatalogCtxData {
  pub api: Arc<dyn StorefrontApi>,
  pub state: Shared<StorefrontState>,
  /// `None` when the fetch failed.
  pub cafes: Option<Vec<Cafe>>,
  pub menu: Option<Vec<MenuItem>>,
}

impl CatalogCtxData {
  pub fn new(api: Arc<dyn StorefrontApi>, state: Shared<StorefrontState>) -> Self {
    CatalogCtxData {
      api,
      state,
      cafes: None,
      menu: None,
    }
  }
}

pub fn build_catalog_flow() -> Flow<CatalogCtxData, CafeError> {
  let mut flow: Flow<CatalogCtxData, CafeError> = Flow::new("catalog", &[(FETCH_STEP, false), (PUBLISH_STEP, false)]);
  flow.on(FETCH_STEP, fetch_catalog);
  flow.on(PUBLISH_STEP, publish_catalog);
  flow
}

#[instrument(name = "catalog::fetch", skip_all)]
async fn fetch_catalog(ctx: Shared<CatalogCtxData>) -> CafeResult<StepControl> {
  let api = ctx.read().api.clone();

  // No ordering between the two; each result is kept or dropped on its own.
  let (cafes, menu) = tokio::join!(api.fetch_cafes(), api.fetch_menu());

  let cafes = cafes
    .inspect(|cafes| info!(count = cafes.len(), "Cafés fetched."))
    .inspect_err(|e| warn!(error = %e, "Café fetch failed; continuing without café details."))
    .ok();
  let menu = menu
    .inspect(|menu| info!(count = menu.len(), "Menu fetched."))
    .inspect_err(|e| warn!(error = %e, "Menu fetch failed; continuing with the current menu."))
    .ok();

  let mut guard = ctx.write();
  guard.cafes = cafes;
  guard.menu = menu;
  Ok(StepControl::Continue)
}

async fn publish_catalog(ctx: Shared<CatalogCtxData>) -> CafeResult<StepControl> {
  let (state, cafes, menu) = {
    let mut guard = ctx.write();
    (guard.state.clone(), guard.cafes.take(), guard.menu.take())
  };
  let mut state_guard = state.write();
  let next = reducer::catalog_loaded(&state_guard, cafes, menu);
  *state_guard = next;
  Ok(StepControl::Continue)
}
