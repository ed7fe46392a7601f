//! End-to-end bootstrap sequence.
//!
//! Ensures the organization, tenant teams, viewer team, values repository,
//! listener hook and (when GitOps automation is on) per-tenant companion
//! repositories. Every call is tolerant: the run always completes and the
//! returned log decides the outcome.

use futures::future::join_all;

use crate::config::Settings;
use crate::discovery::ServiceResolver;
use crate::errlog::ErrorLog;
use crate::forge::ForgeApi;
use crate::reconcile::{ensure_hook, tolerant, upsert_repo, upsert_team};
use crate::templates::{self, ORG_NAME, VALUES_REPO, VIEWER_TEAM};

const ALREADY_EXISTS: u16 = 422;

/// Reconciles the whole desired topology against the backend.
///
/// The caller has already waited for the backend to become reachable;
/// from here on nothing aborts. Tenant fan-outs run concurrently, each
/// branch collecting into its own log, merged in completion order.
pub async fn run(
    settings: &Settings,
    api: &dyn ForgeApi,
    resolver: &dyn ServiceResolver,
) -> ErrorLog {
    let mut log = ErrorLog::new();

    tracing::info!(org = ORG_NAME, "ensuring organization");
    tolerant(
        &mut log,
        &format!("create org {ORG_NAME}"),
        Some(ALREADY_EXISTS),
        api.create_org(&templates::organization()),
    )
    .await;

    let existing_teams = tolerant(&mut log, "list teams", None, api.list_teams(ORG_NAME))
        .await
        .unwrap_or_default();

    tracing::info!(count = settings.tenants.len(), "reconciling tenant teams");
    let branches = join_all(settings.tenants.iter().map(|tenant| {
        let desired = templates::team_for_tenant(tenant);
        let existing = &existing_teams;
        async move {
            let mut branch = ErrorLog::new();
            upsert_team(api, &mut branch, existing, &desired).await;
            branch
        }
    }))
    .await;
    for branch in branches {
        log.merge(branch);
    }

    upsert_team(api, &mut log, &existing_teams, &templates::viewer_team()).await;

    let existing_repos = tolerant(&mut log, "list repos", None, api.list_repos(ORG_NAME))
        .await
        .unwrap_or_default();

    tracing::info!(repo = VALUES_REPO, "reconciling values repository");
    upsert_repo(
        api,
        &mut log,
        &existing_repos,
        &templates::values_repo(),
        Some(VIEWER_TEAM),
    )
    .await;

    ensure_hook(api, resolver, &mut log, VALUES_REPO, &settings.pipeline_namespace).await;

    if !settings.argocd_enabled {
        tracing::info!("gitops automation disabled, skipping companion repositories");
        return log;
    }

    tracing::info!(count = settings.tenants.len(), "reconciling companion repositories");
    let branches = join_all(settings.tenants.iter().map(|tenant| {
        let repo = templates::companion_repo(&tenant.id);
        let team = templates::tenant_team_name(&tenant.id);
        let existing = &existing_repos;
        async move {
            let mut branch = ErrorLog::new();
            upsert_repo(api, &mut branch, existing, &repo, Some(team.as_str())).await;
            branch
        }
    }))
    .await;
    for branch in branches {
        log.merge(branch);
    }

    log
}
