//! Data models for NebuloHub entities.
//!
//! This module contains the wire-format data structures exchanged with the
//! NebuloHub API:
//!
//! - `User`, `NewUser`, `AuthUser`: account and login types
//! - `Startup`, `StartupSummary`: startup records
//! - `Skill`, `NewSkill`: skill catalog entries
//! - `Rating`, `NewRating`: startup ratings
//! - `SkillLink`, `NewSkillLink`: startup/skill association records
//!
//! Field names follow the API's Portuguese/camelCase wire format through
//! `#[serde(rename)]`; Rust-side names are the domain names.

pub mod rating;
pub mod skill;
pub mod skill_link;
pub mod startup;
pub mod user;

pub use rating::{NewRating, Rating};
pub use skill::{NewSkill, Skill, SkillSummary};
pub use skill_link::{NewSkillLink, SkillLink, SkillLinkRef};
pub use startup::{Startup, StartupSummary};
pub use user::{
    AuthUser, DeleteAck, LoginRequest, LoginResponse, NewUser, User, UserSummary, UserUpdate,
};

use serde::{Deserialize, Serialize};

/// HATEOAS link block attached to collection items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Paged collection envelope used by the list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: i64,
    #[serde(rename = "pageSize")]
    pub page_size: i64,
    #[serde(rename = "totalItems")]
    pub total_items: i64,
    pub items: Vec<T>,
}
