// storefront/src/services/http_api.rs

use async_trait::async_trait;
use caffe::api::{CAFES_PATH, MENU_PATH, ORDERS_PATH, RESERVATIONS_PATH};
use caffe::{Cafe, CafeError, CafeResult, MenuItem, OrderReceipt, OrderRequest, ReservationRequest, StorefrontApi};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// `StorefrontApi` over HTTP/JSON. One attempt per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
  client: Client,
  base_url: String,
}

impl HttpStorefrontApi {
  pub fn new(base_url: impl Into<String>, timeout: Duration) -> CafeResult<Self> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| CafeError::Internal(format!("failed to build HTTP client: {e}")))?;
    Ok(Self {
      client,
      base_url: base_url.into(),
    })
  }

  fn url(&self, path: &str) -> String {
    endpoint_url(&self.base_url, path)
  }

  async fn get_json<T: DeserializeOwned>(&self, path: &str) -> CafeResult<T> {
    let response = self.client.get(self.url(path)).send().await.map_err(transport_error)?;
    let body = success_body(path, response).await?;
    decode(path, &body)
  }
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
  #[instrument(name = "http::fetch_cafes", skip(self), err(Display))]
  async fn fetch_cafes(&self) -> CafeResult<Vec<Cafe>> {
    self.get_json(CAFES_PATH).await
  }

  #[instrument(name = "http::fetch_menu", skip(self), err(Display))]
  async fn fetch_menu(&self) -> CafeResult<Vec<MenuItem>> {
    self.get_json(MENU_PATH).await
  }

  #[instrument(name = "http::place_order", skip_all, fields(lines = order.items.len()), err(Display))]
  async fn place_order(&self, order: &OrderRequest) -> CafeResult<OrderReceipt> {
    let response = self
      .client
      .post(self.url(ORDERS_PATH))
      .json(order)
      .send()
      .await
      .map_err(transport_error)?;
    let body = success_body(ORDERS_PATH, response).await?;
    decode(ORDERS_PATH, &body)
  }

  #[instrument(name = "http::request_reservation", skip_all, fields(party_size = reservation.party_size), err(Display))]
  async fn request_reservation(&self, reservation: &ReservationRequest) -> CafeResult<()> {
    let response = self
      .client
      .post(self.url(RESERVATIONS_PATH))
      .json(reservation)
      .send()
      .await
      .map_err(transport_error)?;
    success_body(RESERVATIONS_PATH, response).await.map(|_| ())
  }
}

pub(crate) fn endpoint_url(base_url: &str, path: &str) -> String {
  format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

// Connect errors, timeouts and broken bodies are all transport failures.
fn transport_error(err: reqwest::Error) -> CafeError {
  if err.is_timeout() {
    warn!("Request timed out.");
  }
  CafeError::Network(err.to_string())
}

async fn success_body(endpoint: &str, response: Response) -> CafeResult<String> {
  let status = response.status();
  let body = response.text().await.map_err(transport_error)?;
  debug!(endpoint, status = status.as_u16(), bytes = body.len(), "Response received.");
  if !status.is_success() {
    return Err(CafeError::Server {
      status: status.as_u16(),
      body,
    });
  }
  Ok(body)
}

pub(crate) fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> CafeResult<T> {
  serde_json::from_str(body).map_err(|e| CafeError::Decode {
    endpoint: endpoint.to_string(),
    message: e.to_string(),
  })
}
