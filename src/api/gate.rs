//! Bearer-token decoration for outgoing API requests.
//!
//! The session manager owns the token lifecycle and pushes changes here via
//! `set_token`; the API client asks `headers_for` to decorate each request.
//! Public endpoints (login, registration) never carry a token, whatever the
//! current session state.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::Result;
use reqwest::header::{self, HeaderMap, HeaderValue};

/// Endpoint path substrings reachable without a bearer token.
const PUBLIC_PATHS: &[&str] = &["/Auth/login", "/Usuario/register"];

/// Shared token cell consulted on every outgoing request.
/// Clone is cheap - all clones observe the same token.
#[derive(Clone, Default)]
pub struct TokenGate {
    token: Arc<RwLock<Option<String>>>,
}

impl TokenGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the token used for future requests. Called by the session
    /// manager on every transition that changes authentication status.
    pub fn set_token(&self, token: Option<String>) {
        *self.write() = token;
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<String> {
        self.read().clone()
    }

    /// Whether the path targets a public (unauthenticated) endpoint.
    pub fn is_public(path: &str) -> bool {
        PUBLIC_PATHS.iter().any(|public| path.contains(public))
    }

    /// Headers for a request targeting `path`: empty for public endpoints,
    /// otherwise `Authorization: Bearer <token>` when a token is set.
    ///
    /// A protected request with no token goes out bare; rejecting it is the
    /// server's call, not this component's.
    pub fn headers_for(&self, path: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if Self::is_public(path) {
            return Ok(headers);
        }
        if let Some(token) = self.read().as_deref() {
            headers.insert(
                header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<String>> {
        self.token.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<String>> {
        self.token.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_endpoint_never_carries_token() {
        let gate = TokenGate::new();
        gate.set_token(Some("tok-123".to_string()));

        for path in ["/Auth/login", "/Usuario/register"] {
            let headers = gate.headers_for(path).unwrap();
            assert!(
                headers.get(header::AUTHORIZATION).is_none(),
                "public path {path} must not carry an auth header"
            );
        }
    }

    #[test]
    fn test_protected_endpoint_carries_current_token() {
        let gate = TokenGate::new();
        gate.set_token(Some("tok-123".to_string()));

        let headers = gate.headers_for("/Startup/12.345.678%2F0001-90").unwrap();
        assert_eq!(
            headers.get(header::AUTHORIZATION).unwrap(),
            "Bearer tok-123"
        );
    }

    #[test]
    fn test_protected_endpoint_without_token_goes_bare() {
        let gate = TokenGate::new();
        let headers = gate.headers_for("/Startup").unwrap();
        assert!(headers.get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_set_token_replaces_previous() {
        let gate = TokenGate::new();
        gate.set_token(Some("old".to_string()));
        gate.set_token(Some("new".to_string()));

        let headers = gate.headers_for("/Usuario/111.111.111-11").unwrap();
        assert_eq!(headers.get(header::AUTHORIZATION).unwrap(), "Bearer new");

        gate.set_token(None);
        let headers = gate.headers_for("/Usuario/111.111.111-11").unwrap();
        assert!(headers.get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_clones_share_the_token() {
        let gate = TokenGate::new();
        let clone = gate.clone();
        gate.set_token(Some("shared".to_string()));
        assert_eq!(clone.token().as_deref(), Some("shared"));
    }
}
