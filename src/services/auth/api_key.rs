//! `Authorization: ApiKey <token>` parsing - core logic.
//!
//! This module knows nothing about middleware, extensions or responses.
//! Callers map `ApiKeyError` to 401 themselves (see `crate::error`).

use std::fmt;

use axum::http::{HeaderMap, header};
use sha2::{Digest, Sha256};

/// Scheme name expected before the credentials. Compared case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

// Number of hex chars kept from the SHA-256 digest.
const FINGERPRINT_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl ApiKeyError {
    /// Short, stable name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiKeyError::NoAuthHeader => "no_auth_header",
            ApiKeyError::MalformedHeader => "malformed_header",
        }
    }
}

// HTTP optional whitespace (RFC 9110 5.6.3)
fn is_ows(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Extract the API key from `Authorization: ApiKey <token>`.
///
/// - only the first `Authorization` value is looked at
/// - the scheme must be exactly `ApiKey`
/// - the token ends at the first whitespace after it; the rest is discarded
/// - the token may be empty; rejecting that is up to the caller
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, ApiKeyError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) if !v.is_empty() => v.to_str().map_err(|_| ApiKeyError::MalformedHeader)?,
        _ => return Err(ApiKeyError::NoAuthHeader),
    };

    let (scheme, rest) = value
        .split_once(is_ows)
        .ok_or(ApiKeyError::MalformedHeader)?;

    if scheme != API_KEY_SCHEME {
        return Err(ApiKeyError::MalformedHeader);
    }

    let rest = rest.trim_start_matches(is_ows);
    // "ApiKey " with nothing after the separator yields an empty token
    let token = rest.find(is_ows).map_or(rest, |end| &rest[..end]);

    Ok(token)
}

/// An API key accepted from a request.
///
/// Stored in request extensions by the auth middleware. `Debug` is redacted so
/// the key never ends up in logs by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Non-reversible identifier for log correlation.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        let mut out = hex::encode(digest);
        out.truncate(FINGERPRINT_LEN);
        out
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.fingerprint()).finish()
    }
}
