//! Reqwest-backed forge client and the availability waiter.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::types::{
    Hook, HookSpec, Organization, OrgSpec, RepoSpec, Repository, Team, TeamSpec,
};
use super::{ForgeApi, ForgeError};

/// Interval between availability probes.
const PROBE_INTERVAL: Duration = Duration::from_secs(2);

/// Probe budget before the run is declared dead. Exhaustion is fatal and
/// bypasses the error log entirely.
const PROBE_ATTEMPTS: u32 = 150;

/// Token-authenticated client for a Gitea-compatible REST API.
pub struct HttpForge {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpForge {
    #[must_use]
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<String, ForgeError> {
        let resp = req
            .header("Authorization", format!("token {}", self.token))
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if status.is_success() {
            Ok(body)
        } else {
            let message = if body.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            } else {
                body
            };
            Err(ForgeError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ForgeError> {
        let body = self.send(self.http.get(self.url(path))).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ForgeError> {
        let body = self.send(self.http.post(self.url(path)).json(payload)).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ForgeApi for HttpForge {
    async fn create_org(&self, org: &OrgSpec) -> Result<Organization, ForgeError> {
        self.post_json("/orgs", org).await
    }

    async fn list_teams(&self, org: &str) -> Result<Vec<Team>, ForgeError> {
        self.get_json(&format!("/orgs/{org}/teams")).await
    }

    async fn create_team(&self, org: &str, team: &TeamSpec) -> Result<Team, ForgeError> {
        self.post_json(&format!("/orgs/{org}/teams"), team).await
    }

    async fn edit_team(&self, team_id: i64, team: &TeamSpec) -> Result<(), ForgeError> {
        self.send(self.http.patch(self.url(&format!("/teams/{team_id}"))).json(team))
            .await?;
        Ok(())
    }

    async fn list_repos(&self, org: &str) -> Result<Vec<Repository>, ForgeError> {
        self.get_json(&format!("/orgs/{org}/repos")).await
    }

    async fn create_org_repo(&self, org: &str, repo: &RepoSpec) -> Result<Repository, ForgeError> {
        self.post_json(&format!("/orgs/{org}/repos"), repo).await
    }

    async fn edit_repo(&self, org: &str, repo: &RepoSpec) -> Result<(), ForgeError> {
        self.send(
            self.http
                .patch(self.url(&format!("/repos/{org}/{}", repo.name)))
                .json(repo),
        )
        .await?;
        Ok(())
    }

    async fn add_repo_team(&self, org: &str, repo: &str, team: &str) -> Result<(), ForgeError> {
        self.send(self.http.put(self.url(&format!("/repos/{org}/{repo}/teams/{team}"))))
            .await?;
        Ok(())
    }

    async fn list_hooks(&self, org: &str, repo: &str) -> Result<Vec<Hook>, ForgeError> {
        self.get_json(&format!("/repos/{org}/{repo}/hooks")).await
    }

    async fn create_hook(&self, org: &str, repo: &str, hook: &HookSpec) -> Result<(), ForgeError> {
        self.send(
            self.http
                .post(self.url(&format!("/repos/{org}/{repo}/hooks")))
                .json(hook),
        )
        .await?;
        Ok(())
    }
}

/// Blocks until the backend answers its version endpoint.
///
/// Never-available is the one failure mode with no tolerated path: the
/// whole run aborts.
pub async fn wait_until_ready(base_url: &str) -> anyhow::Result<()> {
    let url = format!("{}/api/v1/version", base_url.trim_end_matches('/'));
    let http = reqwest::Client::new();
    for attempt in 1..=PROBE_ATTEMPTS {
        match http.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => {
                tracing::info!(%url, attempt, "backend is reachable");
                return Ok(());
            }
            Ok(resp) => {
                tracing::debug!(%url, status = resp.status().as_u16(), "backend not ready");
            }
            Err(err) => {
                tracing::debug!(%url, %err, "backend not reachable");
            }
        }
        tokio::time::sleep(PROBE_INTERVAL).await;
    }
    anyhow::bail!("backend at {url} did not become available")
}
