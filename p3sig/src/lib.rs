//! # p3sig
//!
//! Request canonicalization and signing for the P3 object storage gateway.
//! The scheme follows AWS S3 REST authentication: a canonical string built from the method, content hash,
//! content type, timestamp, `x-p3-*` headers and resource path is signed with HMAC-SHA1, and the result is sent as
//! `Authorization: <access key id>:<base64 signature>`.
//!
//! This crate is sans-I/O. See `p3sig-http` for the `http::Request` extension and the object store client.

mod canonical;
mod crypto;
mod error;
mod method;
mod signature;
mod signing_request;
mod string_to_sign;
mod timestamp;
mod trace;

/// Prefix of the custom namespace headers covered by the signature
pub const P3_HEADER_PREFIX: &str = "x-p3-";
/// Bucket of the object
pub const P3_BUCKET_HEADER: &str = "x-p3-bucket";
/// Decimal seconds since epoch, preferred over `Date`
pub const P3_UNIXTIME_HEADER: &str = "x-p3-unixtime";
/// Content hash, preferred over `Content-MD5`
pub const P3_CONTENT_MD5_HEADER: &str = "x-p3-content-md5";
/// Content type, preferred over `Content-Type`
pub const P3_CONTENT_TYPE_HEADER: &str = "x-p3-content-type";
/// Requests with a timestamp older than this are rejected
pub const FRESHNESS_WINDOW_MINUTES: i64 = 15;

pub mod prelude {
  pub use crate::{
    canonical::{canonical_resource, CanonicalHeaders},
    crypto::{AlgorithmName, SharedKey, SigningKey},
    error::{P3SigError, P3SigResult},
    method::Method,
    signature::Signature,
    signing_request::SigningRequest,
    string_to_sign::StringToSign,
    timestamp::{check_freshness, format_timestamp, parse_http_date, parse_unix_time, resolve_timestamp},
  };
  pub use crate::{
    FRESHNESS_WINDOW_MINUTES, P3_BUCKET_HEADER, P3_CONTENT_MD5_HEADER, P3_CONTENT_TYPE_HEADER, P3_HEADER_PREFIX,
    P3_UNIXTIME_HEADER,
  };
}

/* ----------------------------------------------------------------- */
