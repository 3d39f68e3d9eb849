//! URL parsing.
//!
//! A deliberately small `scheme://host[:port]/path` parser with a fixed
//! split order: first `"://"`, then first `/`, then first `:`. Inputs the
//! W3C URL algorithm would normalize (double slashes after the authority,
//! unencoded path characters) pass through untouched. Queries, fragments,
//! and percent-decoding are not modeled.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Supported URL schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// Port used when the authority has no explicit `:port` suffix.
    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed URL, immutable once constructed.
///
/// # Examples
///
/// ```
/// use graze::url::{ParsedUrl, Scheme};
///
/// let url = ParsedUrl::parse("http://example.org/a/b").unwrap();
/// assert_eq!(url.scheme, Scheme::Http);
/// assert_eq!(url.host, "example.org");
/// assert_eq!(url.port, 80);
/// assert_eq!(url.path, "/a/b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: Scheme,
    pub host: String,
    /// Explicit `:port` from the authority, or the scheme default (80/443).
    pub port: u16,
    /// Always begins with `/`; defaults to `/` when the input has no path.
    pub path: String,
}

impl ParsedUrl {
    /// Parse a raw URL string.
    ///
    /// Fails with [`Error::UnsupportedScheme`] when the part left of `"://"`
    /// is not exactly `http` or `https` (an input without `"://"` counts as
    /// one big scheme), and with [`Error::InvalidPort`] when a `:port`
    /// suffix does not parse cleanly as a base-10 `u16`.
    pub fn parse(raw: &str) -> Result<Self> {
        let Some((scheme, rest)) = raw.split_once("://") else {
            return Err(Error::UnsupportedScheme(raw.to_string()));
        };
        let scheme = match scheme {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            other => return Err(Error::UnsupportedScheme(other.to_string())),
        };

        // The first slash ends the authority. Everything after it is kept
        // verbatim behind a single leading slash, which preserves empty
        // segments: "http://h//a" parses to path "//a".
        let (authority, path) = match rest.split_once('/') {
            Some((authority, tail)) => (authority, format!("/{}", tail)),
            None => (rest, "/".to_string()),
        };

        let (host, port) = match authority.split_once(':') {
            Some((host, port_text)) => {
                let port = port_text
                    .parse::<u16>()
                    .map_err(|_| Error::InvalidPort(port_text.to_string()))?;
                (host, port)
            }
            None => (authority, scheme.default_port()),
        };

        Ok(Self {
            scheme,
            host: host.to_string(),
            port,
            path,
        })
    }
}

impl FromStr for ParsedUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ParsedUrl {
    /// Reassembles the URL with the port always explicit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}{}", self.scheme, self.host, self.port, self.path)
    }
}
