use crate::crypto::AlgorithmName;
use base64::{engine::general_purpose, Engine as _};

/* ---------------------------------------- */
#[derive(Clone, PartialEq, Eq)]
/// Raw signature over a string to sign
pub struct Signature {
  alg: AlgorithmName,
  bytes: Vec<u8>,
}

impl Signature {
  pub(crate) fn new(alg: AlgorithmName, bytes: Vec<u8>) -> Self {
    Self { alg, bytes }
  }

  pub fn alg(&self) -> AlgorithmName {
    self.alg
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes
  }

  pub fn len(&self) -> usize {
    self.bytes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }

  /// Standard base64 with padding
  pub fn to_base64(&self) -> String {
    general_purpose::STANDARD.encode(&self.bytes)
  }

  /// Value of the `Authorization` header: `<access key id>:<base64 signature>`
  pub fn authorization(&self, access_key_id: &str) -> String {
    format!("{}:{}", access_key_id, self.to_base64())
  }
}

impl std::fmt::Debug for Signature {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Signature")
      .field("alg", &self.alg)
      .field("len", &self.bytes.len())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn authorization_value() {
    let signature = Signature::new(AlgorithmName::HmacSha1, vec![0u8; 20]);
    assert_eq!(signature.len(), 20);
    assert_eq!(signature.to_base64(), "AAAAAAAAAAAAAAAAAAAAAAAAAAA=");
    assert_eq!(signature.authorization("AKID"), "AKID:AAAAAAAAAAAAAAAAAAAAAAAAAAA=");
    assert_eq!(signature.as_bytes(), &[0u8; 20][..]);
    assert_eq!(signature.alg().as_str(), "hmac-sha1");
    assert_eq!(format!("{signature:?}"), "Signature { alg: HmacSha1, len: 20 }");
  }
}
