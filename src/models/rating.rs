use serde::{Deserialize, Serialize};

/// A startup rating (avaliação): a 0-5 star score with an optional comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "idAvaliacao")]
    pub id: i64,
    #[serde(rename = "nota")]
    pub score: i32,
    #[serde(rename = "comentario", default)]
    pub comment: Option<String>,
    #[serde(rename = "usuarioCPF", default)]
    pub author_cpf: Option<String>,
}

/// Payload for submitting a new rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRating {
    #[serde(rename = "nota")]
    pub score: i32,
    #[serde(rename = "comentario", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "usuarioCPF")]
    pub author_cpf: String,
    #[serde(rename = "startupCNPJ")]
    pub startup_cnpj: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating() {
        let json = r#"{"idAvaliacao": 12, "nota": 4, "comentario": "Produto promissor"}"#;
        let rating: Rating = serde_json::from_str(json).unwrap();
        assert_eq!(rating.id, 12);
        assert_eq!(rating.score, 4);
        assert_eq!(rating.comment.as_deref(), Some("Produto promissor"));
        assert!(rating.author_cpf.is_none());
    }

    #[test]
    fn test_new_rating_wire_format() {
        let req = NewRating {
            score: 5,
            comment: None,
            author_cpf: "111.111.111-11".to_string(),
            startup_cnpj: "12.345.678/0001-90".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["nota"], 5);
        assert_eq!(json["usuarioCPF"], "111.111.111-11");
        assert_eq!(json["startupCNPJ"], "12.345.678/0001-90");
        assert!(json.get("comentario").is_none());
    }
}
