use serde::{Deserialize, Serialize};

use super::Links;

/// Skill catalog entry (habilidade).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "idHabilidade")]
    pub id: i64,
    #[serde(rename = "nomeHabilidade")]
    pub name: String,
    #[serde(rename = "tipoHabilidade")]
    pub kind: String,
}

/// Collection item from the paged skill listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSummary {
    #[serde(rename = "idHabilidade")]
    pub id: i64,
    #[serde(rename = "nomeHabilidade")]
    pub name: String,
    #[serde(rename = "tipoHabilidade")]
    pub kind: String,
    #[serde(default)]
    pub links: Option<Links>,
}

/// Payload for creating a new skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSkill {
    #[serde(rename = "nomeHabilidade")]
    pub name: String,
    #[serde(rename = "tipoHabilidade")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Page;

    #[test]
    fn test_parse_skill_page() {
        let json = r#"{
            "page": 1,
            "pageSize": 100,
            "totalItems": 2,
            "items": [
                {"idHabilidade": 3, "nomeHabilidade": "Machine Learning", "tipoHabilidade": "Tecnologia", "links": {"self": "/Habilidade/3"}},
                {"idHabilidade": 7, "nomeHabilidade": "Growth", "tipoHabilidade": "Marketing"}
            ]
        }"#;
        let page: Page<SkillSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_items, 2);
        assert_eq!(page.items[0].name, "Machine Learning");
        assert_eq!(
            page.items[0].links.as_ref().unwrap().self_link,
            "/Habilidade/3"
        );
        assert!(page.items[1].links.is_none());
    }
}
