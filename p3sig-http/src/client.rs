use crate::{
  config::P3Config,
  content_md5::content_md5_hex,
  error::{ClientError, ClientResult, P3HttpError},
  http_ext::P3Auth,
  trace::*,
};
use bytes::Bytes;
use http::{header::HeaderValue, Request, StatusCode};
use p3sig::prelude::P3_CONTENT_MD5_HEADER;
use serde::Deserialize;

/* ---------------------------------------- */
#[derive(Debug, Clone, Deserialize)]
/// Response of a put object request
pub struct PutObjectOutput {
  /// Content id of the stored object
  pub cid: String,
}

/* ---------------------------------------- */
#[derive(Debug, Clone)]
/// Object store client signing every request with the configured access key
pub struct P3Client {
  config: P3Config,
  http: reqwest::Client,
}

impl P3Client {
  pub fn new(config: P3Config) -> Self {
    Self::with_http_client(config, reqwest::Client::new())
  }

  /// Client for the public endpoint with credentials from the environment
  pub fn from_env() -> ClientResult<Self> {
    Ok(Self::new(P3Config::from_env()?))
  }

  /// Use a preconfigured reqwest client, e.g., with custom timeouts
  pub fn with_http_client(config: P3Config, http: reqwest::Client) -> Self {
    Self { config, http }
  }

  pub fn config(&self) -> &P3Config {
    &self.config
  }

  /// Build the signed request storing `data` under `bucket`/`key`
  pub fn build_put_object_request(&self, bucket: &str, key: &str, data: Bytes) -> ClientResult<Request<Bytes>> {
    let md5 = content_md5_hex(&data);
    let mut req = Request::builder()
      .method(http::Method::PUT)
      .uri(self.config.object_url(key))
      .body(data)?;
    req
      .headers_mut()
      .insert(P3_CONTENT_MD5_HEADER, HeaderValue::from_str(&md5).map_err(P3HttpError::from)?);
    self.sign(req, bucket, key)
  }

  /// Build the signed request reading the object under `bucket`/`key`
  pub fn build_get_object_request(&self, bucket: &str, key: &str) -> ClientResult<Request<Bytes>> {
    let req = Request::builder()
      .method(http::Method::GET)
      .uri(self.config.object_url(key))
      .body(Bytes::new())?;
    self.sign(req, bucket, key)
  }

  /// Build the signed request reading an object by its content id
  pub fn build_get_object_by_cid_request(&self, cid: &str) -> ClientResult<Request<Bytes>> {
    let mut req = Request::builder()
      .method(http::Method::GET)
      .uri(format!("{}?is_cid=1", self.config.object_url(cid)))
      .body(Bytes::new())?;
    req.set_p3_unixtime_now();
    req.set_p3_auth_header("", cid, self.config.access_key_id(), self.config.secret_key())?;
    Ok(req)
  }

  /// Store an object and return its content id
  pub async fn put_object(&self, bucket: &str, key: &str, data: impl Into<Bytes>) -> ClientResult<String> {
    let req = self.build_put_object_request(bucket, key, data.into())?;
    let body = self.send(req).await?;
    let output: PutObjectOutput = serde_json::from_slice(&body)?;
    debug!("Stored {}/{} as {}", bucket, key, output.cid);
    Ok(output.cid)
  }

  /// Read an object by bucket and key
  pub async fn get_object(&self, bucket: &str, key: &str) -> ClientResult<Bytes> {
    let req = self.build_get_object_request(bucket, key)?;
    self.send(req).await
  }

  /// Read an object by content id
  pub async fn get_object_by_cid(&self, cid: &str) -> ClientResult<Bytes> {
    let req = self.build_get_object_by_cid_request(cid)?;
    self.send(req).await
  }

  /// Set bucket and timestamp, then sign
  fn sign(&self, mut req: Request<Bytes>, bucket: &str, key: &str) -> ClientResult<Request<Bytes>> {
    req.set_p3_bucket(bucket)?;
    req.set_p3_unixtime_now();
    req.set_p3_auth_header(bucket, key, self.config.access_key_id(), self.config.secret_key())?;
    Ok(req)
  }

  async fn send(&self, req: Request<Bytes>) -> ClientResult<Bytes> {
    debug!("{} {}", req.method(), req.uri());
    let req = reqwest::Request::try_from(req)?;
    let res = self.http.execute(req).await?;
    let status = res.status();
    if status != StatusCode::OK {
      warn!("p3 gateway responded with {}", status);
      return Err(ClientError::Status(status));
    }
    Ok(res.bytes().await?)
  }
}
