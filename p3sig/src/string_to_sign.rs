use crate::{canonical::canonical_resource, signing_request::SigningRequest, timestamp::format_timestamp};

/// String to sign, i.e., the canonical form of a request that the gateway recomputes byte-for-byte.
///
/// ```text
/// Method + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// RFC3339 UTC timestamp + "\n" +
/// CanonicalizedP3Headers + "\n" +
/// CanonicalizedResource
/// ```
///
/// `CanonicalizedP3Headers` is itself newline-joined and is an empty line when there are no `x-p3-` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringToSign {
  lines: [String; 6],
}

impl StringToSign {
  /// Returns the string to sign as UTF-8 bytes
  pub fn as_bytes(&self) -> Vec<u8> {
    self.to_string().into_bytes()
  }
}

impl From<&SigningRequest> for StringToSign {
  fn from(req: &SigningRequest) -> Self {
    Self {
      lines: [
        req.method.to_string(),
        req.content_md5.clone(),
        req.content_type.clone(),
        format_timestamp(&req.timestamp),
        req.custom_headers.to_string(),
        canonical_resource(&req.bucket, &req.key),
      ],
    }
  }
}

impl std::fmt::Display for StringToSign {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.lines.join("\n"))
  }
}
