use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Unauthorized - token may be expired")]
    Unauthorized,

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    /// Extract the human-readable message the server embeds in error bodies
    /// (`message` or `mensagem`), if the body is JSON carrying one.
    fn server_message(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        for key in ["message", "mensagem"] {
            if let Some(msg) = value.get(key).and_then(|m| m.as_str()) {
                if !msg.is_empty() {
                    return Some(msg.to_string());
                }
            }
        }
        None
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = Self::server_message(body).unwrap_or_else(|| Self::truncate_body(body));
        match status.as_u16() {
            400 | 422 => ApiError::Validation(detail),
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(detail),
            404 => ApiError::NotFound(detail),
            409 => ApiError::Conflict(detail),
            500..=599 => ApiError::ServerError(detail),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, detail)),
        }
    }

    /// Variant used for login rejections, where the server message (when
    /// present) should reach the user verbatim.
    pub fn credential_rejection(status: reqwest::StatusCode, body: &str) -> Self {
        let message = Self::server_message(body)
            .unwrap_or_else(|| "Invalid email or password".to_string());
        match status.as_u16() {
            400 | 401 | 403 | 422 => ApiError::InvalidCredentials(message),
            _ => Self::from_status(status, body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_prefers_server_message() {
        let err = ApiError::from_status(
            StatusCode::NOT_FOUND,
            r#"{"mensagem":"Usuário não encontrado"}"#,
        );
        match err {
            ApiError::NotFound(msg) => assert_eq!(msg, "Usuário não encontrado"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_falls_back_to_body() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        match err {
            ApiError::ServerError(msg) => assert_eq!(msg, "boom"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_truncates_long_body() {
        let body = "x".repeat(600);
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, &body);
        match err {
            ApiError::ServerError(msg) => {
                assert!(msg.contains("truncated"));
                assert!(msg.len() < body.len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_credential_rejection_messages() {
        let err = ApiError::credential_rejection(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Email ou senha incorretos"}"#,
        );
        match err {
            ApiError::InvalidCredentials(msg) => assert_eq!(msg, "Email ou senha incorretos"),
            other => panic!("unexpected error: {other:?}"),
        }

        // Non-JSON body falls back to the generic message
        let err = ApiError::credential_rejection(StatusCode::UNAUTHORIZED, "<html>");
        match err {
            ApiError::InvalidCredentials(msg) => assert_eq!(msg, "Invalid email or password"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
