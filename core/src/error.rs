// caffe/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CafeError {
  /// The request never produced an HTTP response: connect error, transport
  /// error, or timeout.
  #[error("Network failure: {0}")]
  Network(String),

  /// The remote API answered with a non-success status.
  #[error("Server responded with status {status}: {body}")]
  Server { status: u16, body: String },

  #[error("Could not decode response from {endpoint}: {message}")]
  Decode { endpoint: String, message: String },

  /// A checkout is in flight; cart edits and further checkouts are rejected
  /// until it settles.
  #[error("A checkout is already being submitted")]
  Busy,

  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("Error in step handler or external operation. Source: {source}")]
  HandlerError {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal error: {0}")]
  Internal(String),
}

impl CafeError {
  /// NetworkFailure in the storefront's error taxonomy.
  pub fn is_network_failure(&self) -> bool {
    matches!(self, CafeError::Network(_))
  }

  /// ServerFailure in the storefront's error taxonomy.
  pub fn is_server_failure(&self) -> bool {
    matches!(self, CafeError::Server { .. })
  }
}

impl From<AnyhowError> for CafeError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap a CafeError that was only passed through anyhow, so callers can
    // still match on the variant.
    match err.downcast::<CafeError>() {
      Ok(cafe_err) => cafe_err,
      Err(err) => CafeError::HandlerError { source: err },
    }
  }
}

pub type CafeResult<T, E = CafeError> = std::result::Result<T, E>;
