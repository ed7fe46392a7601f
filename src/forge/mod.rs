//! Forge REST client boundary: error taxonomy and the operations trait.

use async_trait::async_trait;
use thiserror::Error;

pub mod http;
pub mod types;

pub use http::{HttpForge, wait_until_ready};
pub use types::{
    Hook, HookConfig, HookSpec, Organization, OrgSpec, Permission, RepoSpec, Repository, Team,
    TeamSpec,
};

/// Errors emitted by the forge client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ForgeError {
    /// Request transport failed before a response arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// API request failed with a structured status code.
    #[error("api error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the forge.
        status: u16,
        /// Error body/message.
        message: String,
    },

    /// API payload could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ForgeError {
    /// HTTP status carried by the error, when the backend produced one.
    /// Transport and parse failures have no status and are never tolerated.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(_) | Self::Parse(_) => None,
        }
    }
}

impl From<reqwest::Error> for ForgeError {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(status) => Self::Api {
                status: status.as_u16(),
                message: value.to_string(),
            },
            None => Self::Transport(value.to_string()),
        }
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

/// Forge operations the reconcilers depend on.
///
/// Every mutating or listing call the run performs goes through this trait,
/// so tests can substitute a recording fake for the HTTP client.
#[async_trait]
pub trait ForgeApi: Send + Sync {
    /// Creates the organization.
    async fn create_org(&self, org: &OrgSpec) -> Result<Organization, ForgeError>;

    /// Lists all teams of the organization.
    async fn list_teams(&self, org: &str) -> Result<Vec<Team>, ForgeError>;

    /// Creates a team in the organization.
    async fn create_team(&self, org: &str, team: &TeamSpec) -> Result<Team, ForgeError>;

    /// Updates an existing team by id.
    async fn edit_team(&self, team_id: i64, team: &TeamSpec) -> Result<(), ForgeError>;

    /// Lists all repositories of the organization.
    async fn list_repos(&self, org: &str) -> Result<Vec<Repository>, ForgeError>;

    /// Creates a repository owned by the organization.
    async fn create_org_repo(&self, org: &str, repo: &RepoSpec) -> Result<Repository, ForgeError>;

    /// Updates an existing repository.
    async fn edit_repo(&self, org: &str, repo: &RepoSpec) -> Result<(), ForgeError>;

    /// Grants a team access to a repository. Idempotent at the backend.
    async fn add_repo_team(&self, org: &str, repo: &str, team: &str) -> Result<(), ForgeError>;

    /// Lists webhooks installed on a repository.
    async fn list_hooks(&self, org: &str, repo: &str) -> Result<Vec<Hook>, ForgeError>;

    /// Installs a webhook on a repository.
    async fn create_hook(&self, org: &str, repo: &str, hook: &HookSpec) -> Result<(), ForgeError>;
}
