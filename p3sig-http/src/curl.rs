use crate::{error::P3HttpResult, http_ext::header_value_str};
use http::Request;

/* ---------------------------------------- */
#[derive(Debug, Clone, PartialEq, Eq)]
/// Shell command reproducing a signed request with curl
pub struct CurlCommand {
  method: String,
  url: String,
  data_file: Option<String>,
  headers: Vec<(String, String)>,
}

impl CurlCommand {
  /// Capture method and headers of a request. The url is given separately so that the request may carry only a path.
  pub fn from_request<B>(req: &Request<B>, url: &str) -> P3HttpResult<Self> {
    let mut headers = req
      .headers()
      .iter()
      .map(|(name, value)| header_value_str(name, value).map(|value| (name.to_string(), value.to_string())))
      .collect::<P3HttpResult<Vec<_>>>()?;
    // stable sort keeps the order of repeated values
    headers.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(Self {
      method: req.method().to_string(),
      url: url.to_string(),
      data_file: None,
      headers,
    })
  }

  /// Upload the given file as the body
  pub fn set_data_file(&mut self, path: &str) -> &mut Self {
    self.data_file = Some(path.to_string());
    self
  }
}

impl std::fmt::Display for CurlCommand {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "curl -X {} {}", self.method, self.url)?;
    if let Some(path) = &self.data_file {
      write!(f, " --data-binary \"@{}\"", path)?;
    }
    for (name, value) in &self.headers {
      write!(f, " -H \"{}: {}\"", name, value)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn curl_get() {
    let req = Request::builder()
      .method("GET")
      .uri("/")
      .header("x-p3-unixtime", "1700000000")
      .header("x-p3-bucket", "object_bucket")
      .header("authorization", "id:sig=")
      .body(())
      .unwrap();
    let curl = CurlCommand::from_request(&req, "http://p3.photon.storage:13000/gateway/v1/key").unwrap();
    assert_eq!(
      curl.to_string(),
      "curl -X GET http://p3.photon.storage:13000/gateway/v1/key \
       -H \"authorization: id:sig=\" -H \"x-p3-bucket: object_bucket\" -H \"x-p3-unixtime: 1700000000\""
    );
  }

  #[test]
  fn curl_put_with_data_file() {
    let req = Request::builder()
      .method("PUT")
      .uri("/")
      .header("x-p3-tag", "b")
      .header("x-p3-tag", "a")
      .body(())
      .unwrap();
    let mut curl = CurlCommand::from_request(&req, "http://localhost/key").unwrap();
    curl.set_data_file("object.bin");
    assert_eq!(
      curl.to_string(),
      "curl -X PUT http://localhost/key --data-binary \"@object.bin\" -H \"x-p3-tag: b\" -H \"x-p3-tag: a\""
    );
  }

  #[test]
  fn curl_keeps_utf8_values() {
    let req = Request::builder()
      .method("GET")
      .uri("/")
      .header("x-p3-meta-name", http::HeaderValue::from_bytes("café".as_bytes()).unwrap())
      .body(())
      .unwrap();
    let curl = CurlCommand::from_request(&req, "http://localhost/key").unwrap();
    assert_eq!(curl.to_string(), "curl -X GET http://localhost/key -H \"x-p3-meta-name: café\"");

    let req = Request::builder()
      .method("GET")
      .uri("/")
      .header("x-p3-meta-name", http::HeaderValue::from_bytes(b"caf\xe9").unwrap())
      .body(())
      .unwrap();
    assert!(CurlCommand::from_request(&req, "http://localhost/key").is_err());
  }
}
