use super::AlgorithmName;
use crate::error::{P3SigError, P3SigResult};
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/* -------------------------------- */
/// Shared key for p3 request signing, i.e., the access key secret
#[derive(Clone)]
pub enum SharedKey {
  /// hmac-sha1
  HmacSha1(Vec<u8>),
}

impl SharedKey {
  /// Create a new shared key from the raw secret bytes
  pub fn from_bytes(key: &[u8]) -> Self {
    SharedKey::HmacSha1(key.to_vec())
  }

  /// Create a new shared key from the secret string as distributed with the access key id
  pub fn from_secret(secret: &str) -> Self {
    Self::from_bytes(secret.as_bytes())
  }

  /// Returns the key material as UTF-8, which is how the gateway feeds it to the mac
  fn encoded(&self) -> P3SigResult<&[u8]> {
    match self {
      SharedKey::HmacSha1(key) => {
        let key = std::str::from_utf8(key).map_err(|e| P3SigError::Encoding(format!("secret key: {e}")))?;
        Ok(key.as_bytes())
      }
    }
  }
}

impl std::fmt::Debug for SharedKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SharedKey::HmacSha1(_) => f.write_str("SharedKey::HmacSha1(<redacted>)"),
    }
  }
}

impl super::SigningKey for SharedKey {
  /// Sign the data
  fn sign(&self, data: &[u8]) -> P3SigResult<Vec<u8>> {
    let key = self.encoded()?;
    match self {
      SharedKey::HmacSha1(_) => {
        let mut mac = HmacSha1::new_from_slice(key).map_err(|e| P3SigError::Encoding(e.to_string()))?;
        mac.update(data);
        Ok(mac.finalize().into_bytes().to_vec())
      }
    }
  }

  /// Get the algorithm name
  fn alg(&self) -> AlgorithmName {
    match self {
      SharedKey::HmacSha1(_) => AlgorithmName::HmacSha1,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::crypto::SigningKey;

  #[test]
  fn symmetric_key_works() {
    // RFC 2202 test case 2
    let key = SharedKey::from_secret("Jefe");
    let signature = key.sign(b"what do ya want for nothing?").unwrap();
    assert_eq!(
      signature,
      vec![
        0xef, 0xfc, 0xdf, 0x6a, 0xe5, 0xeb, 0x2f, 0xa2, 0xd2, 0x74, 0x16, 0xd5, 0xf1, 0x84, 0xdf, 0x9c, 0x25, 0x9a, 0x7c,
        0x79
      ]
    );
    assert_eq!(signature.len(), key.alg().output_len());
  }

  #[test]
  fn non_utf8_key_is_rejected() {
    let key = SharedKey::from_bytes(&[0xff, 0xfe, 0x00]);
    let res = key.sign(b"data");
    assert!(matches!(res, Err(P3SigError::Encoding(_))));
  }

  #[test]
  fn debug_does_not_leak_secret() {
    let key = SharedKey::from_secret("mock_signing_key");
    let debugged = format!("{key:?}");
    assert!(!debugged.contains("mock_signing_key"));
  }
}
