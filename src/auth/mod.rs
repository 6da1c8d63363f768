//! Authentication module for managing the user session.
//!
//! This module provides:
//! - `SessionManager`: the session state machine (restoration, sign-in,
//!   sign-out, sign-up, and timer-driven expiry)
//! - `CredentialStore`: durable key-value persistence for the session record
//! - `Session`, `SessionStatus`, `SessionUser`: session state types
//!
//! Sessions are persisted to the device and expire 30 minutes after sign-in.

pub mod claims;
pub mod manager;
pub mod session;
pub mod store;

pub use manager::{AuthApi, SessionManager};
pub use session::{Session, SessionStatus, SessionUser, SESSION_DURATION_MINUTES};
pub use store::{CredentialStore, FileStore, MemoryStore};
