use crate::P3_HEADER_PREFIX;
use std::collections::BTreeMap;

/* ---------------------------------------------------------------- */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Custom namespace (`x-p3-*`) headers of a request, keyed by lower-cased name.
/// Values of a repeated header keep their insertion order.
pub struct CanonicalHeaders {
  inner: BTreeMap<String, Vec<String>>,
}

impl CanonicalHeaders {
  /// Collect the `x-p3-` headers out of all headers of a request. Other headers are ignored.
  pub fn from_headers<'a, I>(headers: I) -> Self
  where
    I: IntoIterator<Item = (&'a str, &'a str)>,
  {
    let mut canonical = Self::default();
    headers.into_iter().for_each(|(name, value)| canonical.append(name, value));
    canonical
  }

  /// Append a value if the name is in the custom namespace
  pub fn append(&mut self, name: &str, value: &str) {
    let name = name.to_ascii_lowercase();
    if !name.starts_with(P3_HEADER_PREFIX) {
      return;
    }
    self.inner.entry(name).or_default().push(value.to_string());
  }

  /// First value of the given header, if any
  pub fn get(&self, name: &str) -> Option<&str> {
    self
      .inner
      .get(&name.to_ascii_lowercase())
      .and_then(|values| values.first())
      .map(|v| v.as_str())
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  /// Iterate over `(name, values)` sorted by name
  pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
    self.inner.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
  }
}

impl std::fmt::Display for CanonicalHeaders {
  /// `name:value1,value2` lines joined with `\n`, no trailing newline
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let lines = self
      .iter()
      .map(|(name, values)| format!("{}:{}", name, values.join(",")))
      .collect::<Vec<_>>();
    write!(f, "{}", lines.join("\n"))
  }
}

/* ---------------------------------------------------------------- */
/// Canonical absolute resource path for a bucket and key.
/// Whitespace around segments and empty segments are dropped, so `" /a//b/ "` and `"a/b"` agree.
pub fn canonical_resource(bucket: &str, key: &str) -> String {
  let joined = format!("{bucket}/{key}");
  let segments = joined
    .split('/')
    .map(|segment| segment.trim())
    .filter(|segment| !segment.is_empty())
    .collect::<Vec<_>>();
  format!("/{}", segments.join("/"))
}
