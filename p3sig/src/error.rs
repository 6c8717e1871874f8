use thiserror::Error;

/// Result type for p3 request signing
pub type P3SigResult<T> = std::result::Result<T, P3SigError>;

/// Error type for p3 request signing
#[derive(Error, Debug)]
pub enum P3SigError {
  /* ----- Timestamp errors ----- */
  /// Neither `x-p3-unixtime` nor `Date` is available
  #[error("request date missing")]
  RequestDateMissing,
  /// Timestamp is older than the freshness window
  #[error("request date too old: {0}")]
  RequestTooOld(String),
  /// Malformed `x-p3-unixtime` value
  #[error("Failed to parse unix time: {0}")]
  ParseUnixTime(#[from] std::num::ParseIntError),
  /// `x-p3-unixtime` value that cannot be represented as a date
  #[error("Unix time out of range: {0}")]
  UnixTimeOutOfRange(i64),
  /// Malformed `Date` value
  #[error("Failed to parse date: {0}")]
  ParseDate(String),

  /* ----- Request errors ----- */
  /// Http method outside the supported set
  #[error("Unsupported method: {0}")]
  UnsupportedMethod(String),
  /// Key or signing input is not valid UTF-8 text
  #[error("Failed to encode signing input: {0}")]
  Encoding(String),
}
