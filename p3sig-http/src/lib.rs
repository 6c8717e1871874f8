//! # p3sig-http
//!
//! `p3sig-http` extends `http::Request` with the p3 gateway authentication scheme and provides a small object store
//! client built on it.
//!
//! - [`P3Auth`] sets `x-p3-bucket` / `x-p3-unixtime` and signs a request into its `Authorization` header.
//! - [`RequestContentMd5`] sets `x-p3-content-md5` from the request body.
//! - [`P3Client`] puts and gets objects, signing every request with the configured access key.
//! - [`CurlCommand`] renders a signed request as an equivalent curl command line.
//!
//! ## Blocking API
//!
//! When the `blocking` feature is enabled (on by default), [`RequestContentMd5Sync`] is provided.
//! It uses `futures::executor::block_on` internally and must not be called from within an async runtime.

mod client;
mod config;
mod content_md5;
mod curl;
mod error;
mod http_ext;
mod trace;

pub use client::{P3Client, PutObjectOutput};
pub use config::{P3Config, ACCESS_KEY_ID_ENV, ACCESS_KEY_SECRET_ENV, DEFAULT_ENDPOINT, DEFAULT_GROUP};
#[cfg(feature = "blocking")]
pub use content_md5::RequestContentMd5Sync;
pub use content_md5::{content_md5_hex, ContentMd5, RequestContentMd5};
pub use curl::CurlCommand;
pub use error::{ClientError, ClientResult, ContentMd5Error, ContentMd5Result, P3HttpError, P3HttpResult};
pub use http_ext::P3Auth;
pub use p3sig::prelude;

/* ----------------------------------------------------------------- */
#[cfg(test)]
mod tests {
  use super::{prelude::*, *};
  use bytes::Bytes;
  use chrono::{DateTime, Utc};
  use http::{header::AUTHORIZATION, Request};
  use http_body_util::Full;

  const BUCKET: &str = "/object_bucket";
  const KEY: &str = "/path/to/object/name";
  const SECRET: &str = "mock_signing_key";
  const ACCESS_KEY_ID: &str = "mock_access_key_id";

  async fn build_request() -> Request<Full<Bytes>> {
    let body = Full::new(&b"object content"[..]);
    let mut req = Request::builder()
      .method("PUT")
      .uri("http://api.p3.photon.storage:13000/gateway/v1/path/to/object/name")
      .header(P3_CONTENT_TYPE_HEADER, "application/octet-stream")
      .header("x-p3-meta-1", "meta-1-val")
      .header("x-p3-meta-2", "meta-2-val")
      .body(body)
      .unwrap();
    req.set_p3_bucket(BUCKET).unwrap();
    req.set_p3_unixtime_now();
    req.set_content_md5().await.unwrap()
  }

  #[tokio::test]
  async fn test_set_auth_header() {
    let mut req = build_request().await;
    let secret_key = SharedKey::from_secret(SECRET);
    req.set_p3_auth_header(BUCKET, KEY, ACCESS_KEY_ID, &secret_key).unwrap();

    // recompute from the wire headers the way the gateway does
    let headers = req
      .headers()
      .iter()
      .filter(|(name, _)| name.as_str() != AUTHORIZATION.as_str())
      .map(|(name, value)| (name.as_str(), value.to_str().unwrap()))
      .collect::<Vec<_>>();
    let signing_request = SigningRequest::try_new(Method::Put, BUCKET, KEY, headers).unwrap();
    assert_eq!(signing_request.content_md5, "b4d4a3b99f3c954c2daf8e142a982d82");
    assert_eq!(signing_request.content_type, "application/octet-stream");

    let now = Utc::now();
    let expected = signing_request.sign_at(&secret_key, &now).unwrap();
    assert_eq!(expected.len(), 20);

    let authorization = req.headers().get(AUTHORIZATION).unwrap().to_str().unwrap();
    assert_eq!(authorization, expected.authorization(ACCESS_KEY_ID));
    let (access_key_id, signature) = authorization.split_once(':').unwrap();
    assert_eq!(access_key_id, ACCESS_KEY_ID);
    assert_eq!(signature, expected.to_base64());
  }

  #[tokio::test]
  async fn test_stale_request_keeps_headers() {
    let mut req = build_request().await;
    let before = req.headers().clone();
    let later = DateTime::<Utc>::from_timestamp(Utc::now().timestamp() + 16 * 60, 0).unwrap();
    let res = req.set_p3_auth_header_at(BUCKET, KEY, ACCESS_KEY_ID, &SharedKey::from_secret(SECRET), &later);
    assert!(matches!(res, Err(P3HttpError::P3SigError(P3SigError::RequestTooOld(_)))));
    assert_eq!(req.headers(), &before);
  }

  #[test]
  fn test_curl_for_signed_request() {
    let client = P3Client::new(P3Config::new(DEFAULT_ENDPOINT, ACCESS_KEY_ID, SECRET));
    let req = client.build_get_object_request("object_bucket", "path/to/object").unwrap();
    let curl = CurlCommand::from_request(&req, &req.uri().to_string()).unwrap().to_string();
    assert!(curl.starts_with("curl -X GET http://api.p3.photon.storage:13000/gateway/v1/path/to/object "));
    assert!(curl.contains("-H \"authorization: mock_access_key_id:"));
    assert!(curl.contains("-H \"x-p3-bucket: object_bucket\""));
  }
}
