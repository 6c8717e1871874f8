use crate::error::{P3SigError, P3SigResult};

/* ---------------------------------------------------------------- */
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
/// Http methods accepted by the gateway
pub enum Method {
  Get,
  Put,
  Post,
  Delete,
  Head,
}

impl AsRef<str> for Method {
  fn as_ref(&self) -> &str {
    match self {
      Self::Get => "GET",
      Self::Put => "PUT",
      Self::Post => "POST",
      Self::Delete => "DELETE",
      Self::Head => "HEAD",
    }
  }
}

impl std::fmt::Display for Method {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_ref())
  }
}

impl std::str::FromStr for Method {
  type Err = P3SigError;

  /// Method tokens are case-sensitive
  fn from_str(s: &str) -> P3SigResult<Self> {
    match s {
      "GET" => Ok(Self::Get),
      "PUT" => Ok(Self::Put),
      "POST" => Ok(Self::Post),
      "DELETE" => Ok(Self::Delete),
      "HEAD" => Ok(Self::Head),
      _ => Err(P3SigError::UnsupportedMethod(s.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn method_from_str() {
    assert_eq!("PUT".parse::<Method>().unwrap(), Method::Put);
    assert_eq!(Method::Delete.to_string(), "DELETE");
    assert!(matches!("put".parse::<Method>(), Err(P3SigError::UnsupportedMethod(_))));
    assert!("PATCH".parse::<Method>().is_err());
  }
}
