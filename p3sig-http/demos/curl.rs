use bytes::Bytes;
use http::Request;
use p3sig_http::{prelude::*, *};

const BUCKET: &str = "object_bucket";
const KEY: &str = "path/to/object/name";
const DATA_FILE: &str = "object.bin";
const OBJECT_CONTENT: &[u8] = b"object content";

// used when P3_ACCESS_KEY_ID / P3_ACCESS_KEY_SECRET are not set
const DEMO_ACCESS_KEY_ID: &str = "mock_access_key_id";
const DEMO_ACCESS_KEY_SECRET: &str = "mock_signing_key";

fn config() -> P3Config {
  P3Config::from_env().unwrap_or_else(|e| {
    println!("{e}, using demo credentials");
    P3Config::new(DEFAULT_ENDPOINT, DEMO_ACCESS_KEY_ID, DEMO_ACCESS_KEY_SECRET)
  })
}

/// Signed GET of an object
fn get_command(client: &P3Client) -> CurlCommand {
  let req = client.build_get_object_request(BUCKET, KEY).unwrap();
  CurlCommand::from_request(&req, &req.uri().to_string()).unwrap()
}

/// Signed PUT of an object with an explicit content type
fn put_command(config: &P3Config) -> CurlCommand {
  let url = config.object_url(KEY);
  let mut req = Request::builder()
    .method("PUT")
    .uri(&url)
    .header(P3_CONTENT_MD5_HEADER, content_md5_hex(OBJECT_CONTENT))
    .header(P3_CONTENT_TYPE_HEADER, "application/octet-stream")
    .header("content-type", "application/octet-stream")
    .body(Bytes::from_static(OBJECT_CONTENT))
    .unwrap();
  req.set_p3_bucket(BUCKET).unwrap();
  req.set_p3_unixtime_now();
  req
    .set_p3_auth_header(BUCKET, KEY, config.access_key_id(), config.secret_key())
    .unwrap();

  let mut curl = CurlCommand::from_request(&req, &url).unwrap();
  curl.set_data_file(DATA_FILE);
  curl
}

fn main() {
  let config = config();
  let client = P3Client::new(config.clone());

  println!("Generated curl cmd for GET:");
  println!("{}", get_command(&client));

  println!("Generated curl cmd for PUT (body: {DATA_FILE} containing {:?}):", String::from_utf8_lossy(OBJECT_CONTENT));
  println!("{}", put_command(&config));
}
