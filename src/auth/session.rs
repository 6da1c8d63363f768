use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Session validity window in minutes. The backend does not report an
/// expiry, so the client applies a fixed window from sign-in.
pub const SESSION_DURATION_MINUTES: i64 = 30;

/// Persisted credential record keys. Written together at sign-in, removed
/// together at sign-out; restoration requires all three.
pub(crate) const KEY_TOKEN: &str = "token";
pub(crate) const KEY_USER: &str = "user";
pub(crate) const KEY_EXPIRES_AT: &str = "expires_at";
pub(crate) const SESSION_KEYS: [&str; 3] = [KEY_TOKEN, KEY_USER, KEY_EXPIRES_AT];

/// Authentication status of the session.
///
/// `Loading` only exists between process start and the completion of
/// `SessionManager::restore`; afterwards the session is always either
/// `Anonymous` or `Authenticated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Anonymous,
    Authenticated,
}

/// Profile snapshot captured at sign-in. Not re-fetched automatically.
///
/// `cpf` is recovered from the token's claims because the login response
/// omits it from the profile payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub cpf: Option<String>,
}

/// In-memory session state. Mutated only by the `SessionManager`; consumers
/// receive clones.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    pub expires_at: Option<DateTime<Utc>>,
    pub status: SessionStatus,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            expires_at: None,
            status: SessionStatus::Loading,
        }
    }
}

impl Session {
    /// Build an authenticated session. Token, user, and expiry are set
    /// together so the mutual-exclusivity invariant holds by construction.
    pub fn authenticated(token: String, user: SessionUser, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            expires_at: Some(expires_at),
            status: SessionStatus::Authenticated,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            token: None,
            user: None,
            expires_at: None,
            status: SessionStatus::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() >= expires_at,
            None => false,
        }
    }

    pub fn time_until_expiry(&self) -> Option<Duration> {
        self.expires_at.map(|expires_at| expires_at - Utc::now())
    }

    /// Expiry instant for a session starting now.
    pub fn expiry_from_now() -> DateTime<Utc> {
        Utc::now() + Duration::minutes(SESSION_DURATION_MINUTES)
    }
}
