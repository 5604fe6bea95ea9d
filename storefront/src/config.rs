// storefront/src/config.rs

use crate::errors::{AppError, Result};
use caffe::Customer;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Base URL of the storefront API, without a trailing slash.
  pub backend_url: String,
  pub request_timeout: Duration,
  /// Who orders are placed as unless `checkout` names someone.
  pub customer: Customer,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let backend_url = lookup("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
    let backend_url = backend_url.trim().trim_end_matches('/').to_string();
    if backend_url.is_empty() {
      return Err(AppError::Config("BACKEND_URL is empty".to_string()));
    }

    let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
      Some(raw) => raw
        .trim()
        .parse::<u64>()
        .map_err(|e| AppError::Config(format!("Invalid REQUEST_TIMEOUT_SECS '{}': {}", raw, e)))?,
      None => DEFAULT_TIMEOUT_SECS,
    };
    if timeout_secs == 0 {
      return Err(AppError::Config("REQUEST_TIMEOUT_SECS must be at least 1".to_string()));
    }

    let mut customer = Customer::default();
    if let Some(name) = lookup("CUSTOMER_NAME") {
      customer.name = name;
    }
    if let Some(contact) = lookup("CUSTOMER_CONTACT") {
      customer.contact = contact;
    }

    tracing::info!(backend_url = %backend_url, timeout_secs, "Application configuration loaded.");

    Ok(Self {
      backend_url,
      request_timeout: Duration::from_secs(timeout_secs),
      customer,
    })
  }
}
