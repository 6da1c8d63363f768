//! API client for the NebuloHub REST API.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! requests against the platform's user, startup, skill, rating, and
//! skill-association endpoints.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::auth::AuthApi;
use crate::config::Config;
use crate::models::{
    DeleteAck, LoginRequest, LoginResponse, NewRating, NewSkill, NewSkillLink, NewUser, Page,
    Rating, Skill, SkillLink, SkillLinkRef, SkillSummary, Startup, StartupSummary, User,
    UserSummary, UserUpdate,
};
use crate::utils::validate::{is_valid_cnpj, is_valid_cpf};

use super::{ApiError, TokenGate};

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 10s matches the backend's responsiveness on a local network while still
/// failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Page size for the skill catalog listing.
/// The catalog is small; one page fetches it whole.
const SKILL_PAGE_SIZE: i64 = 100;

/// Public (unauthenticated) endpoint paths. Must stay within the
/// `TokenGate` allowlist so these requests go out without a bearer header.
const LOGIN_PATH: &str = "/Auth/login";
const REGISTER_PATH: &str = "/Usuario/register";

/// API client for the NebuloHub backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection
/// pooling, and the gate is shared.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    gate: TokenGate,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>, gate: TokenGate) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            gate,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the persisted configuration.
    pub fn from_config(config: &Config, gate: TokenGate) -> Result<Self> {
        Self::new(config.api_base_url(), gate)
    }

    /// The request gate this client decorates requests with.
    pub fn gate(&self) -> &TokenGate {
        &self.gate
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .headers(self.gate.headers_for(path)?)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", path))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", path))
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .client
            .post(self.url(path))
            .headers(self.gate.headers_for(path)?)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", path))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", path))
    }

    async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .client
            .put(self.url(path))
            .headers(self.gate.headers_for(path)?)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send PUT request to {}", path))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", path))
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .delete(self.url(path))
            .headers(self.gate.headers_for(path)?)
            .send()
            .await
            .with_context(|| format!("Failed to send DELETE request to {}", path))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", path))
    }

    /// DELETE where the response body is not interesting to callers.
    async fn delete_ignoring_body(&self, path: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(path))
            .headers(self.gate.headers_for(path)?)
            .send()
            .await
            .with_context(|| format!("Failed to send DELETE request to {}", path))?;

        Self::check_response(response).await?;
        Ok(())
    }

    // ===== Users =====

    /// Fetch the user listing.
    pub async fn fetch_users(&self) -> Result<Vec<UserSummary>> {
        let page: Page<UserSummary> = self.get("/Usuario").await?;
        Ok(page.items)
    }

    /// Fetch a user by CPF.
    pub async fn fetch_user(&self, cpf: &str) -> Result<User> {
        if !is_valid_cpf(cpf) {
            return Err(ApiError::Validation(format!("Invalid CPF: {}", cpf)).into());
        }
        self.get(&format!("/Usuario/{}", cpf)).await
    }

    /// Update a user's profile fields.
    pub async fn update_user(&self, cpf: &str, update: &UserUpdate) -> Result<User> {
        if !is_valid_cpf(cpf) {
            return Err(ApiError::Validation(format!("Invalid CPF: {}", cpf)).into());
        }
        self.put(&format!("/Usuario/{}", cpf), update).await
    }

    /// Delete a user account.
    pub async fn delete_user(&self, cpf: &str) -> Result<DeleteAck> {
        if !is_valid_cpf(cpf) {
            return Err(ApiError::Validation(format!("Invalid CPF: {}", cpf)).into());
        }
        self.delete(&format!("/Usuario/{}", cpf)).await
    }

    // ===== Startups =====

    /// Fetch the startup listing.
    pub async fn fetch_startups(&self) -> Result<Vec<StartupSummary>> {
        let page: Page<StartupSummary> = self.get("/Startup").await?;
        Ok(page.items)
    }

    /// Fetch a startup's full record by CNPJ, including its embedded skills
    /// and ratings.
    pub async fn fetch_startup(&self, cnpj: &str) -> Result<Startup> {
        if !is_valid_cnpj(cnpj) {
            return Err(ApiError::Validation(format!("Invalid CNPJ: {}", cnpj)).into());
        }
        self.get(&format!("/Startup/{}", cnpj)).await
    }

    // ===== Skills =====

    /// Fetch one page of the skill catalog.
    pub async fn fetch_skills(&self, page: i64) -> Result<Page<SkillSummary>> {
        self.get(&format!(
            "/Habilidade?page={}&pageSize={}",
            page, SKILL_PAGE_SIZE
        ))
        .await
    }

    /// Fetch a skill by id.
    pub async fn fetch_skill(&self, id: i64) -> Result<Skill> {
        self.get(&format!("/Habilidade/{}", id)).await
    }

    /// Add a skill to the catalog.
    pub async fn create_skill(&self, skill: &NewSkill) -> Result<Skill> {
        self.post("/Habilidade", skill).await
    }

    // ===== Ratings =====

    /// Fetch a rating by id.
    pub async fn fetch_rating(&self, id: i64) -> Result<Rating> {
        self.get(&format!("/Avaliacao/{}", id)).await
    }

    /// Submit a new rating for a startup.
    pub async fn create_rating(&self, rating: &NewRating) -> Result<Rating> {
        self.post("/Avaliacao", rating).await
    }

    // ===== Skill associations =====

    /// Fetch a skill association by id.
    pub async fn fetch_skill_link(&self, id: i64) -> Result<SkillLink> {
        self.get(&format!("/Possui/{}", id)).await
    }

    /// Fetch the skill associations belonging to one startup.
    ///
    /// The listing endpoint returns ids only, so each record is fetched
    /// individually before filtering by CNPJ.
    pub async fn fetch_startup_skill_links(&self, cnpj: &str) -> Result<Vec<SkillLink>> {
        if !is_valid_cnpj(cnpj) {
            return Err(ApiError::Validation(format!("Invalid CNPJ: {}", cnpj)).into());
        }

        let page: Page<SkillLinkRef> = self.get("/Possui").await?;
        debug!(count = page.items.len(), "Expanding skill association ids");

        let fetches = page.items.iter().map(|item| self.fetch_skill_link(item.id));
        let links = futures::future::try_join_all(fetches).await?;

        Ok(links
            .into_iter()
            .filter(|link| link.startup.cnpj == cnpj)
            .collect())
    }

    /// Associate a skill with a startup.
    pub async fn create_skill_link(&self, link: &NewSkillLink) -> Result<SkillLink> {
        self.post("/Possui", link).await
    }

    /// Remove a skill association.
    pub async fn delete_skill_link(&self, id: i64) -> Result<()> {
        self.delete_ignoring_body(&format!("/Possui/{}", id)).await
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    /// Authenticate with the platform. Rejections carry the server's
    /// message when it supplies one.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .headers(self.gate.headers_for(LOGIN_PATH)?)
            .json(request)
            .send()
            .await
            .context("Failed to send login request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::credential_rejection(status, &body).into());
        }

        response
            .json()
            .await
            .context("Failed to parse login response")
    }

    /// Register a new account.
    async fn register(&self, user: &NewUser) -> Result<User> {
        self.post(REGISTER_PATH, user).await
    }
}
