//! Team upsert: edit when a team of the same name exists, create otherwise.

use crate::errlog::ErrorLog;
use crate::forge::{ForgeApi, Team, TeamSpec};
use crate::reconcile::tolerant::tolerant;
use crate::templates::ORG_NAME;

/// Status the forge returns for validation no-ops and create races.
const ALREADY_EXISTS: u16 = 422;

/// Ensures `desired` exists in the organization.
///
/// `existing` is the team listing taken at the start of the run; the lookup
/// is by exact name. Both branches tolerate 422: an edit that changes
/// nothing, or a create racing a concurrent run.
pub async fn upsert_team(api: &dyn ForgeApi, log: &mut ErrorLog, existing: &[Team], desired: &TeamSpec) {
    match existing.iter().find(|team| team.name == desired.name) {
        Some(team) => {
            tracing::debug!(team = %desired.name, id = team.id, "editing existing team");
            tolerant(
                log,
                &format!("edit team {}", desired.name),
                Some(ALREADY_EXISTS),
                api.edit_team(team.id, desired),
            )
            .await;
        }
        None => {
            tracing::debug!(team = %desired.name, "creating team");
            tolerant(
                log,
                &format!("create team {}", desired.name),
                Some(ALREADY_EXISTS),
                api.create_team(ORG_NAME, desired),
            )
            .await;
        }
    }
}
