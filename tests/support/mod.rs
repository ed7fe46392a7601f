//! Shared test doubles: a call-recording forge and canned resolvers.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use forge_operator::discovery::ServiceResolver;
use forge_operator::forge::{
    ForgeApi, ForgeError, Hook, HookConfig, HookSpec, Organization, OrgSpec, Permission, RepoSpec,
    Repository, Team, TeamSpec,
};

/// One observed forge call, in a shape tests can assert on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateOrg(String),
    ListTeams,
    CreateTeam(String, Permission),
    EditTeam(i64, String),
    ListRepos,
    CreateRepo(String),
    EditRepo(String),
    AddRepoTeam { repo: String, team: String },
    ListHooks(String),
    CreateHook { repo: String, url: String },
}

#[derive(Default)]
struct State {
    teams: Vec<Team>,
    repos: Vec<Repository>,
    hooks: Vec<Hook>,
    calls: Vec<Call>,
    failures: HashMap<&'static str, u16>,
    next_id: i64,
}

/// In-memory [`ForgeApi`] recording every call, with seedable existing
/// state and per-operation failure injection.
#[derive(Default)]
pub struct MockForge {
    state: Mutex<State>,
}

impl MockForge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team(self, id: i64, name: &str, permission: Permission) -> Self {
        self.state.lock().unwrap().teams.push(Team {
            id,
            name: name.to_string(),
            permission,
            includes_all_repositories: false,
        });
        self
    }

    pub fn with_repo(self, id: i64, name: &str) -> Self {
        self.state.lock().unwrap().repos.push(Repository {
            id,
            name: name.to_string(),
            private: true,
        });
        self
    }

    pub fn with_hook(self, id: i64, url: &str) -> Self {
        self.state.lock().unwrap().hooks.push(Hook {
            id,
            config: HookConfig {
                url: url.to_string(),
                http_method: "post".to_string(),
                content_type: "json".to_string(),
            },
        });
        self
    }

    /// Makes the named operation fail with the given status from now on.
    pub fn failing(self, op: &'static str, status: u16) -> Self {
        self.state.lock().unwrap().failures.insert(op, status);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| matches(call)).count()
    }

    fn check(&self, op: &'static str, call: Call) -> Result<(), ForgeError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.failures.get(op) {
            Some(&status) => Err(ForgeError::Api {
                status,
                message: format!("{op} failed"),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ForgeApi for MockForge {
    async fn create_org(&self, org: &OrgSpec) -> Result<Organization, ForgeError> {
        self.check("create_org", Call::CreateOrg(org.username.clone()))?;
        Ok(Organization {
            id: 1,
            username: org.username.clone(),
        })
    }

    async fn list_teams(&self, _org: &str) -> Result<Vec<Team>, ForgeError> {
        self.check("list_teams", Call::ListTeams)?;
        Ok(self.state.lock().unwrap().teams.clone())
    }

    async fn create_team(&self, _org: &str, team: &TeamSpec) -> Result<Team, ForgeError> {
        self.check(
            "create_team",
            Call::CreateTeam(team.name.clone(), team.permission),
        )?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        Ok(Team {
            id: state.next_id,
            name: team.name.clone(),
            permission: team.permission,
            includes_all_repositories: team.includes_all_repositories,
        })
    }

    async fn edit_team(&self, team_id: i64, team: &TeamSpec) -> Result<(), ForgeError> {
        self.check("edit_team", Call::EditTeam(team_id, team.name.clone()))
    }

    async fn list_repos(&self, _org: &str) -> Result<Vec<Repository>, ForgeError> {
        self.check("list_repos", Call::ListRepos)?;
        Ok(self.state.lock().unwrap().repos.clone())
    }

    async fn create_org_repo(&self, _org: &str, repo: &RepoSpec) -> Result<Repository, ForgeError> {
        self.check("create_repo", Call::CreateRepo(repo.name.clone()))?;
        Ok(Repository {
            id: 99,
            name: repo.name.clone(),
            private: repo.private,
        })
    }

    async fn edit_repo(&self, _org: &str, repo: &RepoSpec) -> Result<(), ForgeError> {
        self.check("edit_repo", Call::EditRepo(repo.name.clone()))
    }

    async fn add_repo_team(&self, _org: &str, repo: &str, team: &str) -> Result<(), ForgeError> {
        self.check(
            "add_repo_team",
            Call::AddRepoTeam {
                repo: repo.to_string(),
                team: team.to_string(),
            },
        )
    }

    async fn list_hooks(&self, _org: &str, repo: &str) -> Result<Vec<Hook>, ForgeError> {
        self.check("list_hooks", Call::ListHooks(repo.to_string()))?;
        Ok(self.state.lock().unwrap().hooks.clone())
    }

    async fn create_hook(&self, _org: &str, repo: &str, hook: &HookSpec) -> Result<(), ForgeError> {
        self.check(
            "create_hook",
            Call::CreateHook {
                repo: repo.to_string(),
                url: hook.config.url.clone(),
            },
        )
    }
}

/// Resolver returning a fixed host.
pub struct StaticResolver(pub &'static str);

#[async_trait]
impl ServiceResolver for StaticResolver {
    async fn resolve(&self, _service: &str, _namespace: &str) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}

/// Resolver that always fails, forcing the DNS fallback.
pub struct UnresolvableResolver;

#[async_trait]
impl ServiceResolver for UnresolvableResolver {
    async fn resolve(&self, _service: &str, _namespace: &str) -> anyhow::Result<String> {
        anyhow::bail!("service not found")
    }
}
