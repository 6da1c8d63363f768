//! Session lifecycle: restoration, sign-in, sign-out, and expiry.
//!
//! One `SessionManager` instance owns the session for the process lifetime.
//! It is the only writer of session state; UI consumers read through
//! `status`/`user`/`snapshot` and never mutate fields directly.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration as StdDuration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::TokenGate;
use crate::models::{LoginRequest, LoginResponse, NewUser, User};
use crate::utils::validate::is_valid_cpf;

use super::claims;
use super::session::{
    Session, SessionStatus, SessionUser, KEY_EXPIRES_AT, KEY_TOKEN, KEY_USER, SESSION_KEYS,
};
use super::store::CredentialStore;

/// Remote authentication and registration collaborator. `ApiClient`
/// implements this against the live backend; tests inject stubs.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;
    async fn register(&self, user: &NewUser) -> Result<User>;
}

/// The single scheduled sign-out task. Arming replaces and aborts any prior
/// task, so at most one expiry can ever be pending.
#[derive(Default)]
struct ExpiryTimer {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl ExpiryTimer {
    fn arm(&self, handle: JoinHandle<()>) {
        if let Some(prev) = self.lock().replace(handle) {
            prev.abort();
        }
    }

    fn cancel(&self) {
        if let Some(handle) = self.lock().take() {
            handle.abort();
        }
    }

    /// Drop the stored handle without aborting. The expiry task calls this
    /// on itself once its sleep completes, so the sign-out it then runs
    /// cannot abort the task mid-cleanup.
    fn release(&self) {
        self.lock().take();
    }

    fn is_armed(&self) -> bool {
        self.lock().as_ref().is_some_and(|h| !h.is_finished())
    }

    fn lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.handle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct ManagerInner {
    auth: Arc<dyn AuthApi>,
    store: Arc<dyn CredentialStore>,
    gate: TokenGate,
    state: RwLock<Session>,
    timer: ExpiryTimer,
}

/// Owner of the session state machine.
/// Clone is cheap and shares the same session.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<ManagerInner>,
}

impl SessionManager {
    pub fn new(auth: Arc<dyn AuthApi>, store: Arc<dyn CredentialStore>, gate: TokenGate) -> Self {
        Self {
            inner: Arc::new(ManagerInner {
                auth,
                store,
                gate,
                state: RwLock::new(Session::default()),
                timer: ExpiryTimer::default(),
            }),
        }
    }

    /// Rebuild the session from the persisted record. Invoked once at
    /// process start; leaves `Loading` for good.
    ///
    /// The record is accepted only when all three keys are present, the
    /// expiry parses, and it lies in the future. Anything else is discarded
    /// silently: a fully absent record is a plain transition to anonymous,
    /// a partial or expired one additionally runs the sign-out side effects.
    pub async fn restore(&self) -> SessionStatus {
        let store = &self.inner.store;
        let token = store.get(KEY_TOKEN).await;
        let user_json = store.get(KEY_USER).await;
        let expires_raw = store.get(KEY_EXPIRES_AT).await;

        let any_present = token.is_some() || user_json.is_some() || expires_raw.is_some();
        let (Some(token), Some(user_json), Some(expires_raw)) = (token, user_json, expires_raw)
        else {
            if any_present {
                debug!("Discarding partial session record");
                self.clear_session().await;
            } else {
                *self.inner.state.write().await = Session::anonymous();
            }
            return SessionStatus::Anonymous;
        };

        let expires_at = parse_expiry(&expires_raw);
        let user: Option<SessionUser> = serde_json::from_str(&user_json).ok();

        match (expires_at, user) {
            (Some(expires_at), Some(user)) if expires_at > Utc::now() => {
                self.inner.gate.set_token(Some(token.clone()));
                *self.inner.state.write().await =
                    Session::authenticated(token, user, expires_at);
                self.schedule_expiry(delay_until(expires_at));
                debug!("Session restored");
                SessionStatus::Authenticated
            }
            _ => {
                // Expired records sign out immediately rather than arming a
                // zero-delay timer; malformed ones take the same path.
                debug!("Discarding expired or malformed session record");
                self.clear_session().await;
                SessionStatus::Anonymous
            }
        }
    }

    /// Authenticate against the remote collaborator and establish the
    /// session. On failure the error propagates and state is unchanged.
    pub async fn sign_in(&self, credentials: LoginRequest) -> Result<()> {
        let LoginResponse { token, user } = self.inner.auth.login(&credentials).await?;

        // The login profile payload omits the CPF; recover it from the
        // token's claims. A decode failure is not fatal to sign-in.
        let cpf = match claims::decode_claims(&token) {
            Ok(claims) => claims.cpf,
            Err(e) => {
                warn!(error = %e, "Failed to decode token claims, proceeding without CPF");
                None
            }
        };
        if let Some(ref cpf) = cpf {
            if !is_valid_cpf(cpf) {
                warn!(%cpf, "Token CPF claim has unexpected format");
            }
        }

        let user = SessionUser {
            name: user.name,
            email: user.email,
            role: user.role,
            cpf,
        };
        let expires_at = Session::expiry_from_now();

        self.persist(&token, &user, expires_at).await;
        self.inner.gate.set_token(Some(token.clone()));
        *self.inner.state.write().await = Session::authenticated(token, user, expires_at);
        self.schedule_expiry(delay_until(expires_at));
        Ok(())
    }

    /// End the session: cancel the expiry timer, clear in-memory state, the
    /// gate token, and the persisted record. Idempotent.
    pub async fn sign_out(&self) {
        self.inner.timer.cancel();
        self.clear_session().await;
    }

    /// Register a new account. Does not touch session state; the user still
    /// signs in afterwards.
    pub async fn sign_up(&self, profile: NewUser) -> Result<User> {
        self.inner.auth.register(&profile).await
    }

    pub async fn status(&self) -> SessionStatus {
        self.inner.state.read().await.status
    }

    pub async fn user(&self) -> Option<SessionUser> {
        self.inner.state.read().await.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.state.read().await.is_authenticated()
    }

    /// Cloned view of the current session.
    pub async fn snapshot(&self) -> Session {
        self.inner.state.read().await.clone()
    }

    /// Whether a sign-out is currently scheduled.
    pub fn expiry_armed(&self) -> bool {
        self.inner.timer.is_armed()
    }

    /// Persist the three-key record. Writes are sequential and best-effort:
    /// a failed persist leaves the in-memory session authoritative for this
    /// process lifetime but lost on restart.
    async fn persist(&self, token: &str, user: &SessionUser, expires_at: DateTime<Utc>) {
        let store = &self.inner.store;
        if let Err(e) = store.set(KEY_TOKEN, token).await {
            warn!(error = %e, "Failed to persist session token");
        }
        match serde_json::to_string(user) {
            Ok(json) => {
                if let Err(e) = store.set(KEY_USER, &json).await {
                    warn!(error = %e, "Failed to persist session user");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize session user"),
        }
        let expiry_ms = expires_at.timestamp_millis().to_string();
        if let Err(e) = store.set(KEY_EXPIRES_AT, &expiry_ms).await {
            warn!(error = %e, "Failed to persist session expiry");
        }
    }

    async fn clear_session(&self) {
        *self.inner.state.write().await = Session::anonymous();
        self.inner.gate.set_token(None);
        if let Err(e) = self.inner.store.remove_all(&SESSION_KEYS).await {
            warn!(error = %e, "Failed to clear persisted session");
        }
    }

    fn schedule_expiry(&self, delay: StdDuration) {
        let manager = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            manager.inner.timer.release();
            debug!("Session expired, signing out");
            manager.sign_out().await;
        });
        self.inner.timer.arm(handle);
    }
}

fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    let millis = raw.trim().parse::<i64>().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}

fn delay_until(expires_at: DateTime<Utc>) -> StdDuration {
    (expires_at - Utc::now()).to_std().unwrap_or_default()
}
