// storefront/src/main.rs

mod config;
mod errors;
mod services;
mod terminal;

use crate::config::AppConfig;
use crate::errors::Result as AppResult;
use crate::services::HttpStorefrontApi;
use crate::terminal::Terminal;

use caffe::Session;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> AppResult<()> {
  // Logs go to stderr so they never interleave with the rendered views.
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .with_writer(std::io::stderr)
    .init();

  tracing::info!("Starting storefront...");

  let app_config = AppConfig::from_env().inspect_err(|e| {
    tracing::error!(error = %e, "Failed to load application configuration.");
  })?;

  let api = HttpStorefrontApi::new(app_config.backend_url.clone(), app_config.request_timeout)?;
  let session = Session::new(Arc::new(api)).with_customer(app_config.customer.clone());

  // Views render fine without a catalog, so a failed load only logs.
  session.load_catalog().await;

  let mut terminal = Terminal::new(session, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
  terminal.run().await?;

  tracing::info!("Storefront closed.");
  Ok(())
}
