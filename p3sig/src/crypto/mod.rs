mod symmetric;

use crate::error::P3SigResult;

pub use symmetric::SharedKey;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Algorithm names
pub enum AlgorithmName {
  /// The only algorithm the gateway verifies. Weak, but changing it is a protocol version bump.
  HmacSha1,
}

impl AlgorithmName {
  pub fn as_str(&self) -> &'static str {
    match self {
      AlgorithmName::HmacSha1 => "hmac-sha1",
    }
  }

  /// Length of the raw signature in bytes
  pub fn output_len(&self) -> usize {
    match self {
      AlgorithmName::HmacSha1 => 20,
    }
  }
}

impl std::fmt::Display for AlgorithmName {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// SigningKey trait
pub trait SigningKey {
  fn sign(&self, data: &[u8]) -> P3SigResult<Vec<u8>>;
  fn alg(&self) -> AlgorithmName;
}
