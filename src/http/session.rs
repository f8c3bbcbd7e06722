//! Session credential extraction.
//!
//! # Design Decisions
//! - The token is opaque: read from the `session_token` cookie and forwarded
//!   verbatim, never parsed or validated here (auth owns that)
//! - Extraction never rejects; routes decide what an absent token means

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};

const COOKIE_NAME: &str = "session_token";

/// The `session_token` cookie value, if the client sent one.
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    /// Borrow the raw token value.
    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionToken(token_from_headers(&parts.headers)))
    }
}

fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(COOKIE_NAME)?.strip_prefix('='))
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extracts_token() {
        let headers = headers_with_cookie("session_token=abc123");
        assert_eq!(token_from_headers(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_finds_token_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; session_token=tok-9; lang=en");
        assert_eq!(token_from_headers(&headers).as_deref(), Some("tok-9"));
    }

    #[test]
    fn test_value_kept_verbatim() {
        // Opaque token: no decoding, whatever bytes are there are forwarded.
        let headers = headers_with_cookie("session_token=a%20b=c");
        assert_eq!(token_from_headers(&headers).as_deref(), Some("a%20b=c"));
    }

    #[test]
    fn test_missing_cookie_header() {
        assert_eq!(token_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_other_cookies_only() {
        let headers = headers_with_cookie("theme=dark");
        assert_eq!(token_from_headers(&headers), None);
    }
}
