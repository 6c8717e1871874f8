use crate::{
  canonical::CanonicalHeaders,
  crypto::SigningKey,
  error::P3SigResult,
  method::Method,
  signature::Signature,
  string_to_sign::StringToSign,
  timestamp::{check_freshness, resolve_timestamp},
  trace::*,
  P3_CONTENT_MD5_HEADER, P3_CONTENT_TYPE_HEADER, P3_UNIXTIME_HEADER,
};
use chrono::{DateTime, Utc};

/* ---------------------------------------- */
#[derive(Debug, Clone)]
/// Everything of an outgoing request that is covered by its signature.
/// Built once per request and consumed by [`SigningRequest::sign`].
pub struct SigningRequest {
  pub method: Method,
  /// Namespace of the object, may be empty
  pub bucket: String,
  /// Object path, or a cid
  pub key: String,
  /// Resolved content hash, empty if none
  pub content_md5: String,
  /// Resolved content type, empty if none
  pub content_type: String,
  pub timestamp: DateTime<Utc>,
  /// `x-p3-*` headers
  pub custom_headers: CanonicalHeaders,
}

impl SigningRequest {
  /// Resolve a signing request out of all headers of a request.
  ///
  /// Custom namespace headers win over their standard counterparts (`Content-MD5`, `Content-Type`, `Date`).
  /// Header names are matched case-insensitively and the first value of a repeated header is used.
  pub fn try_new<'a, I>(method: Method, bucket: &str, key: &str, headers: I) -> P3SigResult<Self>
  where
    I: IntoIterator<Item = (&'a str, &'a str)>,
  {
    let headers = headers.into_iter().collect::<Vec<_>>();
    let custom_headers = CanonicalHeaders::from_headers(headers.iter().copied());
    let standard = |name: &str| {
      headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| *v)
        .filter(|v| !v.is_empty())
    };
    let custom = |name: &str| custom_headers.get(name).filter(|v| !v.is_empty());

    let content_md5 = custom(P3_CONTENT_MD5_HEADER)
      .or_else(|| standard("content-md5"))
      .unwrap_or_default()
      .to_string();
    let content_type = custom(P3_CONTENT_TYPE_HEADER)
      .or_else(|| standard("content-type"))
      .unwrap_or_default()
      .to_string();
    let timestamp = resolve_timestamp(custom(P3_UNIXTIME_HEADER), standard("date"))?;

    Ok(Self {
      method,
      bucket: bucket.to_string(),
      key: key.to_string(),
      content_md5,
      content_type,
      timestamp,
      custom_headers,
    })
  }

  /// Build the string to sign
  pub fn string_to_sign(&self) -> StringToSign {
    StringToSign::from(self)
  }

  /// Sign the request, checking its freshness against the current time
  pub fn sign(&self, signing_key: &impl SigningKey) -> P3SigResult<Signature> {
    self.sign_at(signing_key, &Utc::now())
  }

  /// Sign the request, checking its freshness against the given time
  pub fn sign_at(&self, signing_key: &impl SigningKey, now: &DateTime<Utc>) -> P3SigResult<Signature> {
    check_freshness(&self.timestamp, now)?;

    let string_to_sign = self.string_to_sign();
    debug!(
      "Signing {} {}/{} with {} ({} custom headers)",
      self.method,
      self.bucket,
      self.key,
      signing_key.alg(),
      self.custom_headers.len()
    );

    let bytes = signing_key.sign(&string_to_sign.as_bytes())?;
    Ok(Signature::new(signing_key.alg(), bytes))
  }
}
