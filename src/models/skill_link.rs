use serde::{Deserialize, Serialize};

use super::{Links, Skill, Startup};

/// Association record linking a startup to a skill (possui).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillLink {
    #[serde(rename = "idPossui")]
    pub id: i64,
    pub startup: Startup,
    #[serde(rename = "habilidade")]
    pub skill: Skill,
}

/// Id-only collection item from the association listing; the full record
/// must be fetched per id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillLinkRef {
    #[serde(rename = "idPossui")]
    pub id: i64,
    #[serde(default)]
    pub links: Option<Links>,
}

/// Payload for creating a new association.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSkillLink {
    #[serde(rename = "startupCNPJ")]
    pub startup_cnpj: String,
    #[serde(rename = "idHabilidade")]
    pub skill_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Page;

    #[test]
    fn test_parse_skill_link() {
        let json = r#"{
            "idPossui": 9,
            "startup": {"cnpj": "12.345.678/0001-90", "nomeStartup": "Orbita Labs", "emailStartup": "contato@orbita.example"},
            "habilidade": {"idHabilidade": 3, "nomeHabilidade": "Machine Learning", "tipoHabilidade": "Tecnologia"}
        }"#;
        let link: SkillLink = serde_json::from_str(json).unwrap();
        assert_eq!(link.id, 9);
        assert_eq!(link.startup.cnpj, "12.345.678/0001-90");
        assert_eq!(link.skill.name, "Machine Learning");
    }

    #[test]
    fn test_parse_skill_link_ref_page() {
        let json = r#"{
            "page": 1,
            "pageSize": 50,
            "totalItems": 1,
            "items": [{"idPossui": 9, "links": {"self": "/Possui/9"}}]
        }"#;
        let page: Page<SkillLinkRef> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 9);
    }
}
