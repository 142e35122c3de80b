//! HTTP method as a typed enum.
//!
//! Covers the RFC 9110 standard methods by name. Any other valid token
//! (WebDAV verbs, `PURGE`) parses as [`Method::Extension`]; no route is ever
//! registered for one, so it travels the normal pipeline and ends in the
//! catch-all 404.

use std::fmt;
use std::str::FromStr;

/// An HTTP method.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
    /// A non-standard method token, kept verbatim.
    Extension(String),
}

impl Method {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Connect => "CONNECT",
            Self::Delete  => "DELETE",
            Self::Get     => "GET",
            Self::Head    => "HEAD",
            Self::Options => "OPTIONS",
            Self::Patch   => "PATCH",
            Self::Post    => "POST",
            Self::Put     => "PUT",
            Self::Trace   => "TRACE",
            Self::Extension(token) => token,
        }
    }
}

/// Error returned when a method string is not a valid RFC 9110 token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid method `{0}`")]
pub struct UnknownMethod(pub String);

/// Parses a method string (e.g. `"GET"`). Case-sensitive per RFC 9110 §9.1,
/// so `"get"` is an extension method, not `GET`.
impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONNECT" => Ok(Self::Connect),
            "DELETE"  => Ok(Self::Delete),
            "GET"     => Ok(Self::Get),
            "HEAD"    => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            "PATCH"   => Ok(Self::Patch),
            "POST"    => Ok(Self::Post),
            "PUT"     => Ok(Self::Put),
            "TRACE"   => Ok(Self::Trace),
            other if is_token(other) => Ok(Self::Extension(other.to_owned())),
            other     => Err(UnknownMethod(other.to_owned())),
        }
    }
}

/// `token = 1*tchar` (RFC 9110 §5.6.2).
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
