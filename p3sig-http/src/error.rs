use p3sig::prelude::P3SigError;
use thiserror::Error;

/// Result type for signing http requests
pub type P3HttpResult<T> = std::result::Result<T, P3HttpError>;

/// Error type for signing http requests
#[derive(Error, Debug)]
pub enum P3HttpError {
  /// Failed to build header value
  #[error("Failed to parse header value: {0}")]
  InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

  /// Inherited from P3SigError
  #[error("P3SigError: {0}")]
  P3SigError(#[from] P3SigError),
}

impl P3HttpError {
  /// The signing error underneath, if any
  pub fn as_sig_error(&self) -> Option<&P3SigError> {
    match self {
      P3HttpError::P3SigError(e) => Some(e),
      _ => None,
    }
  }
}

/// Result type for content-md5
pub type ContentMd5Result<T> = std::result::Result<T, ContentMd5Error>;

/// Error type for content-md5
#[derive(Error, Debug)]
pub enum ContentMd5Error {
  /// Http body error
  #[error("Http body error: {0}")]
  HttpBodyError(String),

  /// Failed to build header value
  #[error("Failed to parse header value: {0}")]
  InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}

/// Result type for the object store client
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Error type for the object store client
#[derive(Error, Debug)]
pub enum ClientError {
  /// Required environment variable is not set
  #[error("Missing environment variable: {0}")]
  MissingEnv(String),

  /// Failed to build the request
  #[error("Failed to build request: {0}")]
  BuildRequest(#[from] http::Error),

  /// Failed to sign the request
  #[error("Failed to sign request: {0}")]
  Sign(#[from] P3HttpError),

  /// Transport error
  #[error("Request error: {0}")]
  Request(#[from] reqwest::Error),

  /// Gateway answered with a non-200 status
  #[error("request error with code: {0}")]
  Status(http::StatusCode),

  /// Unexpected response body
  #[error("Failed to parse response: {0}")]
  ParseResponse(#[from] serde_json::Error),
}
