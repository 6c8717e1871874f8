use crate::{
  error::{P3HttpError, P3HttpResult},
  trace::*,
};
use chrono::{DateTime, Utc};
use http::{header::AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, Request};
use p3sig::prelude::{
  Method, P3SigError, Signature, SigningKey, SigningRequest, P3_BUCKET_HEADER, P3_HEADER_PREFIX, P3_UNIXTIME_HEADER,
};

/// Standard headers that take part in signing when their `x-p3-` counterpart is absent
const STANDARD_SIGNED_HEADERS: &[&str] = &["content-md5", "content-type", "date"];

/* --------------------------------------- */
/// A trait to prepare and sign an http request for the p3 gateway
pub trait P3Auth {
  type Error;

  /// Set `x-p3-bucket`
  fn set_p3_bucket(&mut self, bucket: &str) -> Result<(), Self::Error>;

  /// Set `x-p3-unixtime` to the given time
  fn set_p3_unixtime(&mut self, timestamp: &DateTime<Utc>);

  /// Set `x-p3-unixtime` to the current time
  fn set_p3_unixtime_now(&mut self) {
    self.set_p3_unixtime(&Utc::now())
  }

  /// Resolve the signing request from the current headers
  fn signing_request(&self, bucket: &str, key: &str) -> Result<SigningRequest, Self::Error>;

  /// Compute the signature of the request without touching it
  fn p3_signature<T>(&self, bucket: &str, key: &str, signing_key: &T) -> Result<Signature, Self::Error>
  where
    T: SigningKey;

  /// Sign the request and set `Authorization: <access key id>:<base64 signature>`.
  /// Headers are left as they are when signing fails.
  fn set_p3_auth_header<T>(&mut self, bucket: &str, key: &str, access_key_id: &str, signing_key: &T) -> Result<(), Self::Error>
  where
    T: SigningKey;

  /// Same as [`P3Auth::set_p3_auth_header`] with an explicit clock for the freshness check
  fn set_p3_auth_header_at<T>(
    &mut self,
    bucket: &str,
    key: &str,
    access_key_id: &str,
    signing_key: &T,
    now: &DateTime<Utc>,
  ) -> Result<(), Self::Error>
  where
    T: SigningKey;
}

/* --------------------------------------- */
impl<B> P3Auth for Request<B> {
  type Error = P3HttpError;

  fn set_p3_bucket(&mut self, bucket: &str) -> P3HttpResult<()> {
    let value = HeaderValue::from_str(bucket)?;
    self.headers_mut().insert(P3_BUCKET_HEADER, value);
    Ok(())
  }

  fn set_p3_unixtime(&mut self, timestamp: &DateTime<Utc>) {
    self
      .headers_mut()
      .insert(P3_UNIXTIME_HEADER, HeaderValue::from(timestamp.timestamp()));
  }

  fn signing_request(&self, bucket: &str, key: &str) -> P3HttpResult<SigningRequest> {
    let method = self.method().as_str().parse::<Method>()?;
    let signed_headers = extract_signed_headers(self.headers())?;
    let signing_request = SigningRequest::try_new(method, bucket, key, signed_headers)?;
    Ok(signing_request)
  }

  fn p3_signature<T>(&self, bucket: &str, key: &str, signing_key: &T) -> P3HttpResult<Signature>
  where
    T: SigningKey,
  {
    let signature = self.signing_request(bucket, key)?.sign(signing_key)?;
    Ok(signature)
  }

  fn set_p3_auth_header<T>(&mut self, bucket: &str, key: &str, access_key_id: &str, signing_key: &T) -> P3HttpResult<()>
  where
    T: SigningKey,
  {
    self.set_p3_auth_header_at(bucket, key, access_key_id, signing_key, &Utc::now())
  }

  fn set_p3_auth_header_at<T>(
    &mut self,
    bucket: &str,
    key: &str,
    access_key_id: &str,
    signing_key: &T,
    now: &DateTime<Utc>,
  ) -> P3HttpResult<()>
  where
    T: SigningKey,
  {
    let signature = self.signing_request(bucket, key)?.sign_at(signing_key, now)?;
    let mut value = HeaderValue::from_str(&signature.authorization(access_key_id))?;
    value.set_sensitive(true);
    self.headers_mut().insert(AUTHORIZATION, value);
    debug!("Set p3 authorization header for {} {}", self.method(), self.uri());
    Ok(())
  }
}

/* --------------------------------------- */
/// Collect the headers that can take part in the signature as text.
/// Other headers are skipped so that unrelated opaque values never fail signing.
fn extract_signed_headers(headers: &HeaderMap) -> P3HttpResult<Vec<(&str, &str)>> {
  headers
    .iter()
    .filter(|(name, _)| {
      let name = name.as_str();
      name.starts_with(P3_HEADER_PREFIX) || STANDARD_SIGNED_HEADERS.contains(&name)
    })
    .map(|(name, value)| header_value_str(name, value).map(|value| (name.as_str(), value)))
    .collect()
}

/// Header value as UTF-8 text. Unlike `HeaderValue::to_str`, non-ASCII text is accepted.
pub(crate) fn header_value_str<'a>(name: &HeaderName, value: &'a HeaderValue) -> P3HttpResult<&'a str> {
  std::str::from_utf8(value.as_bytes())
    .map_err(|e| P3HttpError::from(P3SigError::Encoding(format!("header {name}: {e}"))))
}

/* --------------------------------------- */
#[cfg(test)]
#[path = "http_ext_tests.rs"]
mod tests;
