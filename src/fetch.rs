//! Document fetching.
//!
//! One blocking GET per load, nothing more: no redirect following, no
//! timeout, no retries, no status handling. The response is post-validated
//! to be identity-encoded and non-chunked; anything else fails the load.

use log::debug;
use reqwest::blocking::Client;
use reqwest::{header, redirect};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::url::ParsedUrl;

/// Response headers whose presence fails the load outright.
const REJECTED_HEADERS: [&str; 2] = ["transfer-encoding", "content-encoding"];

/// Build the blocking HTTP client shared by a browser session.
///
/// Redirect following is disabled (a 3xx renders whatever body it carries)
/// and the default 30-second request timeout is removed: a load blocks
/// until the full body arrives or the transport fails.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .redirect(redirect::Policy::none())
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| Error::Network(format!("failed to build HTTP client: {}", e)))
}

/// Fetch the body of `url` as text.
///
/// Sends an explicit `Host` header carrying the host only (never the port)
/// plus the configured user agent. Declared transfer/content encodings fail
/// with [`Error::UnsupportedEncoding`]; transport failures map to
/// [`Error::Network`]. The HTTP status line is deliberately ignored, so a
/// 404 body is returned like any other document.
pub fn fetch_body(client: &Client, url: &ParsedUrl, user_agent: &str) -> Result<String> {
    let target = url.to_string();
    debug!("GET {}", target);

    let response = client
        .get(&target)
        .header(header::HOST, url.host.as_str())
        .header(header::USER_AGENT, user_agent)
        .send()
        .map_err(|e| Error::Network(format!("GET {} failed: {}", target, e)))?;

    for name in REJECTED_HEADERS {
        if response.headers().contains_key(name) {
            return Err(Error::UnsupportedEncoding(name.to_string()));
        }
    }

    debug!("{} answered {}", target, response.status());

    response
        .text()
        .map_err(|e| Error::Network(format!("failed to read body from {}: {}", target, e)))
}
