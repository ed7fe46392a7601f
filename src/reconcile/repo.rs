//! Repository upsert with optional team attachment.

use crate::errlog::ErrorLog;
use crate::forge::{ForgeApi, RepoSpec, Repository};
use crate::reconcile::tolerant::tolerant;
use crate::templates::ORG_NAME;

const ALREADY_EXISTS: u16 = 422;

/// Ensures `desired` exists in the organization, then attaches it to
/// `team` when one is given.
///
/// The attachment is attempted unconditionally: the backend treats a repeat
/// grant as a no-op, so the same call covers both the fresh and the
/// already-bound case. Already-exists conditions never fail the run; only
/// genuinely unexpected statuses end up in the log.
pub async fn upsert_repo(
    api: &dyn ForgeApi,
    log: &mut ErrorLog,
    existing: &[Repository],
    desired: &RepoSpec,
    team: Option<&str>,
) {
    let present = existing.iter().any(|repo| repo.name == desired.name);
    if present {
        tracing::debug!(repo = %desired.name, "editing existing repository");
        tolerant(
            log,
            &format!("edit repo {}", desired.name),
            Some(ALREADY_EXISTS),
            api.edit_repo(ORG_NAME, desired),
        )
        .await;
    } else {
        tracing::debug!(repo = %desired.name, "creating repository");
        tolerant(
            log,
            &format!("create repo {}", desired.name),
            Some(ALREADY_EXISTS),
            api.create_org_repo(ORG_NAME, desired),
        )
        .await;
    }

    if let Some(team) = team {
        tolerant(
            log,
            &format!("add team {team} to repo {}", desired.name),
            Some(ALREADY_EXISTS),
            api.add_repo_team(ORG_NAME, &desired.name, team),
        )
        .await;
    }
}
