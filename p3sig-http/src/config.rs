use crate::error::{ClientError, ClientResult};
use p3sig::prelude::SharedKey;

/// Public gateway endpoint
pub const DEFAULT_ENDPOINT: &str = "http://api.p3.photon.storage:13000";
/// Route group of the object api
pub const DEFAULT_GROUP: &str = "gateway/v1";
/// Environment variable holding the access key id
pub const ACCESS_KEY_ID_ENV: &str = "P3_ACCESS_KEY_ID";
/// Environment variable holding the access key secret
pub const ACCESS_KEY_SECRET_ENV: &str = "P3_ACCESS_KEY_SECRET";

/* ---------------------------------------- */
#[derive(Debug, Clone)]
/// Connection and credential settings of the object store client
pub struct P3Config {
  endpoint: String,
  group: String,
  access_key_id: String,
  secret_key: SharedKey,
}

impl P3Config {
  /// Config for the given endpoint and credentials
  pub fn new(endpoint: &str, access_key_id: &str, access_key_secret: &str) -> Self {
    Self {
      endpoint: endpoint.to_string(),
      group: DEFAULT_GROUP.to_string(),
      access_key_id: access_key_id.to_string(),
      secret_key: SharedKey::from_secret(access_key_secret),
    }
  }

  /// Config for the public endpoint with credentials from `P3_ACCESS_KEY_ID` and `P3_ACCESS_KEY_SECRET`
  pub fn from_env() -> ClientResult<Self> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Same as [`P3Config::from_env`] with a custom variable lookup
  pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |name: &str| lookup(name).ok_or_else(|| ClientError::MissingEnv(name.to_string()));
    let access_key_id = var(ACCESS_KEY_ID_ENV)?;
    let access_key_secret = var(ACCESS_KEY_SECRET_ENV)?;
    Ok(Self::new(DEFAULT_ENDPOINT, &access_key_id, &access_key_secret))
  }

  /// Set the gateway endpoint, e.g. `http://localhost:13000`
  pub fn set_endpoint(&mut self, endpoint: &str) -> &mut Self {
    self.endpoint = endpoint.to_string();
    self
  }

  /// Set the route group, e.g. `gateway/v1`
  pub fn set_group(&mut self, group: &str) -> &mut Self {
    self.group = group.to_string();
    self
  }

  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  pub fn group(&self) -> &str {
    &self.group
  }

  pub fn access_key_id(&self) -> &str {
    &self.access_key_id
  }

  pub fn secret_key(&self) -> &SharedKey {
    &self.secret_key
  }

  /// Url of an object or a cid under the route group
  pub fn object_url(&self, key: &str) -> String {
    format!(
      "{}/{}/{}",
      self.endpoint.trim_end_matches('/'),
      self.group.trim_matches('/'),
      key.trim_start_matches('/')
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn config_from_lookup() {
    let config = P3Config::from_lookup(|name| match name {
      ACCESS_KEY_ID_ENV => Some("mock_access_key_id".to_string()),
      ACCESS_KEY_SECRET_ENV => Some("mock_signing_key".to_string()),
      _ => None,
    })
    .unwrap();
    assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    assert_eq!(config.group(), DEFAULT_GROUP);
    assert_eq!(config.access_key_id(), "mock_access_key_id");
    assert!(!format!("{config:?}").contains("mock_signing_key"));
  }

  #[test]
  fn config_missing_env() {
    let res = P3Config::from_lookup(|name| match name {
      ACCESS_KEY_ID_ENV => Some("mock_access_key_id".to_string()),
      _ => None,
    });
    assert!(matches!(res, Err(ClientError::MissingEnv(name)) if name == ACCESS_KEY_SECRET_ENV));
  }

  #[test]
  fn object_url() {
    let mut config = P3Config::new("http://localhost:13000/", "id", "secret");
    assert_eq!(config.object_url("path/to/object"), "http://localhost:13000/gateway/v1/path/to/object");
    config.set_group("/gateway/v2/").set_endpoint("https://p3.example.com");
    assert_eq!(config.object_url("/bafycid"), "https://p3.example.com/gateway/v2/bafycid");
  }
}
