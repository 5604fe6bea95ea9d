// storefront/src/errors.rs

use caffe::CafeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Terminal I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Storefront Error: {source}")]
  Cafe {
    #[from]
    source: CafeError,
  },
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
