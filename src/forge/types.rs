//! Typed wire records for the forge REST API.

use serde::{Deserialize, Serialize};

/// Team access tier. Tiers form a strict order: `Read < Write < Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
    Admin,
}

impl Permission {
    /// Returns the lowercase wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Admin => "admin",
        }
    }
}

/// Organization creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgSpec {
    /// Organization name (the forge calls this `username`).
    pub username: String,
    /// Whether repo admins may change team access on their repos.
    pub repo_admin_change_team_access: bool,
}

/// Organization as reported by the forge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub username: String,
}

/// Desired team definition (create/edit payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSpec {
    pub name: String,
    pub permission: Permission,
    pub includes_all_repositories: bool,
    pub can_create_org_repo: bool,
    /// Capability unit identifiers granted to the team.
    pub units: Vec<String>,
}

/// Existing team as reported by the forge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub permission: Permission,
    #[serde(default)]
    pub includes_all_repositories: bool,
}

/// Desired repository definition (create/edit payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSpec {
    pub name: String,
    pub private: bool,
    pub auto_init: bool,
}

/// Existing repository as reported by the forge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub private: bool,
}

/// Webhook target configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookConfig {
    pub url: String,
    pub http_method: String,
    pub content_type: String,
}

/// Existing webhook as reported by the forge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    pub id: i64,
    pub config: HookConfig,
}

/// Webhook creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookSpec {
    #[serde(rename = "type")]
    pub hook_type: String,
    pub config: HookConfig,
    pub events: Vec<String>,
    pub active: bool,
}

impl HookSpec {
    /// Builds the standard push-event hook pointing at `url`.
    #[must_use]
    pub fn push_hook(url: String) -> Self {
        Self {
            hook_type: "gitea".to_string(),
            config: HookConfig {
                url,
                http_method: "post".to_string(),
                content_type: "json".to_string(),
            },
            events: vec!["push".to_string()],
            active: true,
        }
    }
}
