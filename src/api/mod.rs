//! REST API client module for the NebuloHub platform.
//!
//! This module provides the `ApiClient` for communicating with the NebuloHub
//! backend, the `TokenGate` that decorates protected requests with the
//! session's bearer token, and the `ApiError` taxonomy.
//!
//! Tokens are obtained through the `/Auth/login` endpoint and attached to
//! every request except the public login/registration paths.

pub mod client;
pub mod error;
pub mod gate;

pub use client::ApiClient;
pub use error::ApiError;
pub use gate::TokenGate;
