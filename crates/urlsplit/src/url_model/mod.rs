//! URL modeling.
//!
//! Decomposes `scheme://host[:port]/path` strings. Only the `://` delimiter
//! is validated; everything after it is split on the first `/` and accepted
//! as-is.

mod host;
mod scheme;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

pub use host::parse_host_and_path;
pub use scheme::parse_scheme;

/// A parsed address.
///
/// `host` may carry a `:port` suffix; see [`Url::hostname`] and [`Url::port`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Url {
    pub scheme: String,
    pub host: String,
    pub path: String,
}

impl Url {
    /// Same as [`parse`].
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        parse(raw)
    }

    /// The host without its port.
    pub fn hostname(&self) -> &str {
        host::split_port(&self.host).map_or(self.host.as_str(), |(name, _)| name)
    }

    /// The port portion of the host, or `""` when there is none.
    pub fn port(&self) -> &str {
        host::split_port(&self.host).map_or("", |(_, port)| port)
    }
}

/// Parses a raw string into a [`Url`].
///
/// Fails only when the scheme is missing.
///
/// # Examples
///
/// - `parse("https://foo.com/abc")` → scheme `"https"`, host `"foo.com"`, path `"abc"`
/// - `parse("https://foo.com")` → path `""`
/// - `parse("foo.com")` → `Err(ParseError::MissingScheme)`
pub fn parse(raw: &str) -> Result<Url, ParseError> {
    let Some((scheme, rest)) = parse_scheme(raw) else {
        tracing::debug!(input = raw, "rejected url without scheme");
        return Err(ParseError::MissingScheme);
    };
    let (host, path) = parse_host_and_path(rest);
    tracing::trace!(scheme, host, path, "parsed url");

    Ok(Url {
        scheme: scheme.to_string(),
        host: host.to_string(),
        path: path.to_string(),
    })
}

/// Always renders `scheme://host/path`, so an empty path still gets its `/`.
impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/{}", self.scheme, self.host, self.path)
    }
}

impl FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}
