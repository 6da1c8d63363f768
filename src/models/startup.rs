use serde::{Deserialize, Serialize};

use super::{Links, Rating, Skill};

/// Collection item from the startup listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupSummary {
    pub cnpj: String,
    #[serde(rename = "nomeStartup")]
    pub name: String,
    #[serde(rename = "emailStartup")]
    pub email: String,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub links: Option<Links>,
}

/// Full startup record, including the embedded skill and rating collections
/// the details endpoint returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Startup {
    pub cnpj: String,
    #[serde(rename = "nomeStartup")]
    pub name: String,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "nomeResponsavel", default)]
    pub owner_name: Option<String>,
    #[serde(rename = "emailStartup")]
    pub email: String,
    #[serde(rename = "usuarioCPF", default)]
    pub owner_cpf: Option<String>,
    #[serde(rename = "habilidades", default)]
    pub skills: Vec<Skill>,
    #[serde(rename = "avaliacoes", default)]
    pub ratings: Vec<Rating>,
}

impl Startup {
    /// Mean rating score, or None when the startup has no ratings yet.
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let total: i64 = self.ratings.iter().map(|r| i64::from(r.score)).sum();
        Some(total as f64 / self.ratings.len() as f64)
    }
}
