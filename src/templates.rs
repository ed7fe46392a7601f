//! Fixed names and desired-state templates.
//!
//! Teams are built by dedicated constructor functions per named template so
//! a tweak to one template can never leak into another.

use crate::config::Tenant;
use crate::forge::{OrgSpec, Permission, RepoSpec, TeamSpec};

/// Organization owning every team and repository this operator manages.
pub const ORG_NAME: &str = "platform";

/// Organization-wide read-only team with visibility into all repositories.
pub const VIEWER_TEAM: &str = "platform-viewer";

/// Shared repository holding the platform values.
pub const VALUES_REPO: &str = "values";

/// Self-service capability that grants a tenant admin over its own team.
pub const HOSTING_FEATURE: &str = "gitea";

/// Service name of the pipeline event listener. Doubles as the stable path
/// segment hook detection matches on, so detection survives the listener
/// resolving to a different host across runs.
pub const LISTENER_SERVICE: &str = "el-forge-webhook";

/// Port the event listener serves on.
pub const LISTENER_PORT: u16 = 8080;

/// Capability units every managed team gets.
fn code_units() -> Vec<String> {
    vec!["repo.code".to_string()]
}

/// Name of a tenant's team.
#[must_use]
pub fn tenant_team_name(tenant_id: &str) -> String {
    format!("team-{tenant_id}")
}

/// Name of a tenant's GitOps companion repository.
#[must_use]
pub fn companion_repo_name(tenant_id: &str) -> String {
    format!("{}-argocd", tenant_team_name(tenant_id))
}

/// The organization creation payload.
#[must_use]
pub fn organization() -> OrgSpec {
    OrgSpec {
        username: ORG_NAME.to_string(),
        repo_admin_change_team_access: true,
    }
}

/// Read-only template: sees every repository, creates none.
#[must_use]
pub fn read_only_team(name: &str) -> TeamSpec {
    TeamSpec {
        name: name.to_string(),
        permission: Permission::Read,
        includes_all_repositories: true,
        can_create_org_repo: false,
        units: code_units(),
    }
}

/// Editor template: write access scoped to attached repositories.
#[must_use]
pub fn editor_team(name: &str) -> TeamSpec {
    TeamSpec {
        name: name.to_string(),
        permission: Permission::Write,
        includes_all_repositories: false,
        can_create_org_repo: false,
        units: code_units(),
    }
}

/// Admin template: full control scoped to attached repositories.
#[must_use]
pub fn admin_team(name: &str) -> TeamSpec {
    TeamSpec {
        name: name.to_string(),
        permission: Permission::Admin,
        includes_all_repositories: false,
        can_create_org_repo: true,
        units: code_units(),
    }
}

/// Desired team for a tenant. Tenants that self-manage the hosting feature
/// administer their own team; everyone else gets editor access.
#[must_use]
pub fn team_for_tenant(tenant: &Tenant) -> TeamSpec {
    let name = tenant_team_name(&tenant.id);
    if tenant.has_self_service(HOSTING_FEATURE) {
        admin_team(&name)
    } else {
        editor_team(&name)
    }
}

/// The fixed organization-wide viewer team.
#[must_use]
pub fn viewer_team() -> TeamSpec {
    read_only_team(VIEWER_TEAM)
}

/// The shared values repository.
#[must_use]
pub fn values_repo() -> RepoSpec {
    RepoSpec {
        name: VALUES_REPO.to_string(),
        private: true,
        auto_init: false,
    }
}

/// A tenant's GitOps companion repository.
#[must_use]
pub fn companion_repo(tenant_id: &str) -> RepoSpec {
    RepoSpec {
        name: companion_repo_name(tenant_id),
        private: true,
        auto_init: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant(id: &str, self_service: &[&str]) -> Tenant {
        Tenant {
            id: id.to_string(),
            self_service: self_service.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn self_service_hosting_escalates_to_admin() {
        let team = team_for_tenant(&tenant("a", &["gitea", "argocd"]));
        assert_eq!(team.name, "team-a");
        assert_eq!(team.permission, Permission::Admin);
        assert!(!team.includes_all_repositories);
    }

    #[test]
    fn other_capabilities_do_not_escalate() {
        let team = team_for_tenant(&tenant("b", &["argocd"]));
        assert_eq!(team.permission, Permission::Write);
        let team = team_for_tenant(&tenant("c", &[]));
        assert_eq!(team.permission, Permission::Write);
    }

    #[test]
    fn viewer_team_reads_all_repositories() {
        let team = viewer_team();
        assert_eq!(team.permission, Permission::Read);
        assert!(team.includes_all_repositories);
        assert!(!team.can_create_org_repo);
    }

    #[test]
    fn companion_repo_is_private_and_initialized() {
        let repo = companion_repo("a");
        assert_eq!(repo.name, "team-a-argocd");
        assert!(repo.private);
        assert!(repo.auto_init);
    }

    #[test]
    fn values_repo_is_private_without_auto_init() {
        let repo = values_repo();
        assert!(repo.private);
        assert!(!repo.auto_init);
    }
}
