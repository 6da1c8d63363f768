//! Unverified decode of the bearer token's claims.
//!
//! The login response omits the user's CPF from the profile payload, but the
//! token embeds it as a claim. Decoding happens entirely client-side; the
//! signature is the server's concern and is not checked here.

use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimsError {
    #[error("token is not a three-part JWT")]
    MalformedToken,
    #[error("failed to decode token payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("failed to parse token claims: {0}")]
    Json(#[from] serde_json::Error),
}

/// Claims this client reads from the token payload.
#[derive(Debug, Deserialize)]
pub struct TokenClaims {
    #[serde(default, alias = "nameid")]
    pub cpf: Option<String>,
}

/// Decode the payload segment of a JWT-shaped token.
pub fn decode_claims(token: &str) -> Result<TokenClaims, ClaimsError> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return Err(ClaimsError::MalformedToken),
    };
    let bytes = general_purpose::URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Assemble an unsigned JWT-shaped token around the given payload.
#[cfg(test)]
pub(crate) fn token_with_payload(payload: serde_json::Value) -> String {
    let header = serde_json::json!({"alg": "HS256", "typ": "JWT"});
    let header_b64 = general_purpose::URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header).unwrap());
    let payload_b64 =
        general_purpose::URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap());
    format!("{}.{}.signature", header_b64, payload_b64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_cpf_claim() {
        let token = token_with_payload(json!({
            "cpf": "111.111.111-11",
            "email": "ana@nebulohub.com",
            "exp": 1753000000u64
        }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.cpf.as_deref(), Some("111.111.111-11"));
    }

    #[test]
    fn test_decode_nameid_alias() {
        let token = token_with_payload(json!({"nameid": "222.222.222-22"}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.cpf.as_deref(), Some("222.222.222-22"));
    }

    #[test]
    fn test_decode_missing_claim() {
        let token = token_with_payload(json!({"email": "ana@nebulohub.com"}));
        let claims = decode_claims(&token).unwrap();
        assert!(claims.cpf.is_none());
    }

    #[test]
    fn test_reject_malformed_token() {
        assert!(matches!(
            decode_claims("not-a-jwt"),
            Err(ClaimsError::MalformedToken)
        ));
        assert!(matches!(
            decode_claims("a.b.c.d"),
            Err(ClaimsError::MalformedToken)
        ));
        assert!(matches!(
            decode_claims("head.!!!invalid-base64!!!.sig"),
            Err(ClaimsError::Base64(_))
        ));
    }
}
