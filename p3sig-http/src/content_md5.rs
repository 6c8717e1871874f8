use crate::error::{ContentMd5Error, ContentMd5Result};
use bytes::{Buf, Bytes};
use http::{HeaderValue, Request};
use http_body::Body;
use http_body_util::{BodyExt, Full};
use md5::{Digest, Md5};
use p3sig::prelude::P3_CONTENT_MD5_HEADER;
use std::future::Future;

/* --------------------------------------- */
/// Lower-case hex md5 of the given bytes, the form the gateway expects in `x-p3-content-md5`
pub fn content_md5_hex(data: &[u8]) -> String {
  hex::encode(Md5::digest(data))
}

/* --------------------------------------- */
pub trait ContentMd5: http_body::Body {
  /// Returns the bytes object of the body
  fn into_bytes(self) -> impl Future<Output = Result<Bytes, Self::Error>> + Send
  where
    Self: Sized + Send,
    Self::Data: Send,
  {
    async {
      let mut body_buf = self.collect().await?.aggregate();
      Ok(body_buf.copy_to_bytes(body_buf.remaining()))
    }
  }

  /// Returns the body bytes along with their md5 in hex
  fn into_bytes_with_md5(self) -> impl Future<Output = Result<(Bytes, String), Self::Error>> + Send
  where
    Self: Sized + Send,
    Self::Data: Send,
  {
    async move {
      let body_bytes = self.into_bytes().await?;
      let md5 = content_md5_hex(&body_bytes);
      Ok((body_bytes, md5))
    }
  }
}

impl<T: ?Sized> ContentMd5 for T where T: http_body::Body {}

/* --------------------------------------- */
/// A trait to set `x-p3-content-md5` from the request body
pub trait RequestContentMd5 {
  type Error;
  fn set_content_md5(self) -> impl Future<Output = Result<Request<Full<Bytes>>, Self::Error>> + Send
  where
    Self: Sized;
}

impl<B> RequestContentMd5 for Request<B>
where
  B: Body + Send,
  <B as Body>::Data: Send,
{
  type Error = ContentMd5Error;

  async fn set_content_md5(self) -> ContentMd5Result<Request<Full<Bytes>>>
  where
    Self: Sized,
  {
    let (mut parts, body) = self.into_parts();
    let (body_bytes, md5) = body
      .into_bytes_with_md5()
      .await
      .map_err(|_e| ContentMd5Error::HttpBodyError("Failed to read request body".to_string()))?;

    parts.headers.insert(P3_CONTENT_MD5_HEADER, HeaderValue::from_str(&md5)?);

    Ok(Request::from_parts(parts, Full::new(body_bytes)))
  }
}

#[cfg(feature = "blocking")]
/// Synchronous counterpart of [`RequestContentMd5`].
///
/// # Panics
///
/// Panics if called from within an async runtime. Use [`RequestContentMd5`] there instead.
pub trait RequestContentMd5Sync: RequestContentMd5 {
  fn set_content_md5_sync(self) -> Result<Request<Full<Bytes>>, Self::Error>
  where
    Self: Sized;
}

#[cfg(feature = "blocking")]
impl<B> RequestContentMd5Sync for Request<B>
where
  B: Body + Send,
  <B as Body>::Data: Send,
{
  fn set_content_md5_sync(self) -> ContentMd5Result<Request<Full<Bytes>>>
  where
    Self: Sized,
  {
    futures::executor::block_on(self.set_content_md5())
  }
}

/* --------------------------------------- */
#[cfg(test)]
mod tests {
  use super::*;

  const OBJECT_CONTENT: &[u8] = b"object content";
  const OBJECT_CONTENT_MD5: &str = "b4d4a3b99f3c954c2daf8e142a982d82";

  #[test]
  fn md5_hex() {
    assert_eq!(content_md5_hex(OBJECT_CONTENT), OBJECT_CONTENT_MD5);
    assert_eq!(content_md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
  }

  #[tokio::test]
  async fn body_md5() {
    let body = Full::new(OBJECT_CONTENT);
    let (body_bytes, md5) = body.into_bytes_with_md5().await.unwrap();
    assert_eq!(body_bytes, Bytes::from_static(OBJECT_CONTENT));
    assert_eq!(md5, OBJECT_CONTENT_MD5);
  }

  #[tokio::test]
  async fn request_md5() {
    let req = Request::builder()
      .method("PUT")
      .uri("https://example.com/object")
      .header("content-type", "application/octet-stream")
      .body(Full::new(OBJECT_CONTENT))
      .unwrap();
    let req = req.set_content_md5().await.unwrap();

    let md5 = req.headers().get(P3_CONTENT_MD5_HEADER).unwrap().to_str().unwrap();
    assert_eq!(md5, OBJECT_CONTENT_MD5);
    assert_eq!(req.headers().get("content-type").unwrap(), "application/octet-stream");

    let body = req.into_body().into_bytes().await.unwrap();
    assert_eq!(body, Bytes::from_static(OBJECT_CONTENT));
  }

  #[cfg(feature = "blocking")]
  #[test]
  fn request_md5_sync() {
    let req = Request::builder()
      .method("PUT")
      .uri("https://example.com/object")
      .body(Full::new(OBJECT_CONTENT))
      .unwrap();
    let req = req.set_content_md5_sync().unwrap();
    assert_eq!(req.headers().get(P3_CONTENT_MD5_HEADER).unwrap(), OBJECT_CONTENT_MD5);
  }
}
