//! Run configuration, assembled from the environment.
//!
//! The surrounding platform validates the environment before launching the
//! operator; parsing here still reports malformed tenant JSON as a readable
//! error instead of panicking.

use serde::{Deserialize, Serialize};

/// A platform tenant as declared by the platform configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Tenant identifier; its team is named `team-<id>`.
    pub id: String,
    /// Self-service capability flags enabled for the tenant.
    #[serde(default)]
    pub self_service: Vec<String>,
}

impl Tenant {
    /// Whether the tenant has opted into self-managing the given capability.
    #[must_use]
    pub fn has_self_service(&self, capability: &str) -> bool {
        self.self_service.iter().any(|c| c == capability)
    }
}

/// Fully-resolved settings for one bootstrap run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the forge backend.
    pub base_url: String,
    /// Admin API token.
    pub token: String,
    /// Tenants whose teams (and optionally companion repos) are reconciled.
    pub tenants: Vec<Tenant>,
    /// Whether per-tenant GitOps companion repositories are created.
    pub argocd_enabled: bool,
    /// Namespace the pipeline event listener runs in.
    pub pipeline_namespace: String,
}

/// Parses the `FORGE_TENANTS` JSON array.
pub fn parse_tenants(raw: &str) -> anyhow::Result<Vec<Tenant>> {
    let tenants: Vec<Tenant> = serde_json::from_str(raw)
        .map_err(|err| anyhow::anyhow!("invalid tenant configuration: {err}"))?;
    Ok(tenants)
}
