use serde::{Deserialize, Serialize};

use super::Links;

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// Profile snapshot returned inside the login response.
///
/// The login payload does not include the user's CPF; the session manager
/// recovers it from the token's claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "usuario")]
    pub user: AuthUser,
}

/// Registration payload for a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub cpf: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    pub role: String,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Full user record as returned by the user endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub cpf: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
}

/// Collection item from the user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub cpf: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub links: Option<Links>,
}

/// Partial update for an existing user. Absent fields are left unchanged
/// server-side, so every field is optional and omitted when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "senha", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Acknowledgement body returned by the delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAck {
    #[serde(rename = "mensagem")]
    pub message: String,
}
