//! NebuloHub client core.
//!
//! Session lifecycle and an authenticated REST client for the NebuloHub
//! startup-discovery platform. The crate owns the session state machine
//! (restoration at startup, sign-in, sign-out, timer-driven expiry), the
//! durable credential record, and the bearer-token request gate; a UI layer
//! consumes it through `SessionManager` and `ApiClient`.
//!
//! ```no_run
//! use std::sync::Arc;
//! use nebulohub_client::{ApiClient, Config, FileStore, SessionManager, TokenGate};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let gate = TokenGate::new();
//! let client = ApiClient::from_config(&config, gate.clone())?;
//! let store = Arc::new(FileStore::new(Config::session_dir()?));
//! let session = SessionManager::new(Arc::new(client.clone()), store, gate);
//!
//! // Pick up a persisted session, if one survives and has not expired.
//! session.restore().await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod utils;

pub use api::{ApiClient, ApiError, TokenGate};
pub use auth::{
    AuthApi, CredentialStore, FileStore, MemoryStore, Session, SessionManager, SessionStatus,
    SessionUser,
};
pub use config::Config;
