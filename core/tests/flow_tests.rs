// tests/flow_tests.rs
mod common;

use caffe::{CafeError, Flow, FlowOutcome, Shared, StepControl};
use common::*;
use serial_test::serial;
use std::future::Future;
use std::pin::Pin;

#[derive(Debug, Default)]
struct Trace {
  visited: Vec<String>,
}

type TraceFlow = Flow<Trace, CafeError>;
type StepFuture = Pin<Box<dyn Future<Output = Result<StepControl, CafeError>> + Send>>;

fn record(label: &'static str) -> impl Fn(Shared<Trace>) -> StepFuture + Send + Sync + 'static {
  move |ctx: Shared<Trace>| {
    Box::pin(async move {
      ctx.write().visited.push(label.to_string());
      Ok(StepControl::Continue)
    })
  }
}

fn visited(ctx: &Shared<Trace>) -> Vec<String> {
  ctx.read().visited.clone()
}

#[tokio::test]
#[serial]
async fn steps_run_in_declared_order() {
  setup_tracing();
  let mut flow = TraceFlow::new("ordered", &[("one", false), ("two", false), ("three", false)]);
  flow.on("three", record("three"));
  flow.on("one", record("one"));
  flow.on("two", record("two"));

  let ctx = Shared::new(Trace::default());
  let outcome = flow.run(ctx.clone()).await.unwrap();

  assert_eq!(outcome, FlowOutcome::Completed);
  assert_eq!(visited(&ctx), vec!["one", "two", "three"]);
}

#[tokio::test]
#[serial]
async fn phases_run_before_on_after() {
  setup_tracing();
  let mut flow = TraceFlow::new("phased", &[("only", false)]);
  flow.after("only", record("after"));
  flow.on("only", record("on"));
  flow.before("only", record("before"));
  flow.on("only", record("on again"));

  let ctx = Shared::new(Trace::default());
  flow.run(ctx.clone()).await.unwrap();

  assert_eq!(visited(&ctx), vec!["before", "on", "on again", "after"]);
}

#[tokio::test]
#[serial]
async fn stop_halts_the_remaining_steps() {
  setup_tracing();
  let mut flow = TraceFlow::new("halting", &[("first", false), ("gate", false), ("last", false)]);
  flow.on("first", record("first"));
  flow.on("gate", |ctx: Shared<Trace>| async move {
    ctx.write().visited.push("gate".to_string());
    Ok::<_, CafeError>(StepControl::Stop)
  });
  flow.after("gate", record("gate after"));
  flow.on("last", record("last"));

  let ctx = Shared::new(Trace::default());
  let outcome = flow.run(ctx.clone()).await.unwrap();

  assert_eq!(outcome, FlowOutcome::Stopped);
  assert_eq!(visited(&ctx), vec!["first", "gate"]);
}

#[tokio::test]
#[serial]
async fn handler_error_propagates_unchanged() {
  setup_tracing();
  let mut flow = TraceFlow::new("failing", &[("first", false), ("boom", false), ("last", false)]);
  flow.on("first", record("first"));
  flow.on("boom", |_ctx: Shared<Trace>| async move {
    Err::<StepControl, _>(CafeError::Server {
      status: 503,
      body: "unavailable".to_string(),
    })
  });
  flow.on("last", record("last"));

  let ctx = Shared::new(Trace::default());
  let err = flow.run(ctx.clone()).await.unwrap_err();

  assert!(matches!(err, CafeError::Server { status: 503, .. }));
  assert_eq!(visited(&ctx), vec!["first"]);
}

#[tokio::test]
#[serial]
async fn anyhow_errors_convert_into_the_flow_error() {
  setup_tracing();
  let mut flow = TraceFlow::new("glue", &[("parse", false)]);
  flow.on("parse", |_ctx: Shared<Trace>| async move {
    Err::<StepControl, _>(anyhow::anyhow!("bad payload"))
  });

  let err = flow.run(Shared::new(Trace::default())).await.unwrap_err();

  assert!(matches!(err, CafeError::HandlerError { .. }));
  assert!(err.to_string().contains("bad payload"));
}

#[tokio::test]
#[serial]
async fn required_step_without_handler_fails() {
  setup_tracing();
  let mut flow = TraceFlow::new("incomplete", &[("wired", false), ("unwired", false)]);
  flow.on("wired", record("wired"));

  let ctx = Shared::new(Trace::default());
  let err = flow.run(ctx.clone()).await.unwrap_err();

  match err {
    CafeError::HandlerMissing { step_name } => assert_eq!(step_name, "unwired"),
    other => panic!("unexpected error: {other:?}"),
  }
  assert_eq!(visited(&ctx), vec!["wired"]);
}

#[tokio::test]
#[serial]
async fn optional_step_without_handler_is_skipped() {
  setup_tracing();
  let mut flow = TraceFlow::new("sparse", &[("a", false), ("maybe", true), ("b", false)]);
  flow.on("a", record("a"));
  flow.on("b", record("b"));

  let ctx = Shared::new(Trace::default());
  let outcome = flow.run(ctx.clone()).await.unwrap();

  assert_eq!(outcome, FlowOutcome::Completed);
  assert_eq!(visited(&ctx), vec!["a", "b"]);
}

#[test]
#[should_panic(expected = "is not defined")]
fn registering_an_unknown_step_panics() {
  let mut flow = TraceFlow::new("typo", &[("real", false)]);
  flow.on("reel", record("reel"));
}

#[test]
fn step_names_follow_declaration() {
  let flow = TraceFlow::new("named", &[("x", false), ("y", true)]);
  assert_eq!(flow.name(), "named");
  assert_eq!(flow.step_names().collect::<Vec<_>>(), vec!["x", "y"]);
}
