//! Per-request metadata captured for diagnostic logging.
//!
//! # Responsibilities
//! - Capture the method token and the decoded URL path (never the query)
//! - Capture the first Authorization header value, verbatim, when non-empty
//! - Serialize to a flat JSON object with `Method`, `Path` and `Authorization` members
//!
//! # Design Decisions
//! - Authorization is an `Option` so the member count is always 2 or 3
//! - Non-UTF-8 bytes are replaced with U+FFFD rather than rejected
//! - The value is built once and never mutated

use axum::http::{header::AUTHORIZATION, request::Parts, HeaderMap, Uri};
use percent_encoding::percent_decode_str;
use serde::Serialize;

/// Method, path and optional Authorization value of one inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestDetails {
    #[serde(rename = "Method")]
    method: String,

    #[serde(rename = "Path")]
    path: String,

    #[serde(rename = "Authorization", skip_serializing_if = "Option::is_none")]
    authorization: Option<String>,
}

impl RequestDetails {
    /// Build details from raw values.
    ///
    /// An empty authorization value is treated the same as a missing one.
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        authorization: Option<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            authorization: authorization.filter(|value| !value.is_empty()),
        }
    }

    /// Capture the details of a request from its head.
    pub fn from_parts(parts: &Parts) -> Self {
        Self::new(
            parts.method.as_str(),
            decoded_path(&parts.uri),
            authorization_value(&parts.headers),
        )
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    /// Number of members the serialized object will carry (2 or 3).
    pub fn len(&self) -> usize {
        2 + usize::from(self.authorization.is_some())
    }

    /// Always false; `Method` and `Path` are unconditional.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over `(member name, value)` pairs in serialization order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [("Method", self.method.as_str()), ("Path", self.path.as_str())]
            .into_iter()
            .chain(self.authorization.as_deref().map(|a| ("Authorization", a)))
    }
}

/// Percent-decoded path component of the URI, without the query string.
fn decoded_path(uri: &Uri) -> String {
    let raw = uri.path();
    if raw.is_empty() {
        return "/".to_string();
    }
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// First Authorization header value, if present and non-empty.
fn authorization_value(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .filter(|value| !value.is_empty())
}
