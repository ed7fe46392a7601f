//! Push webhook reconciliation on the shared values repository.

use crate::discovery::{self, ServiceResolver};
use crate::errlog::ErrorLog;
use crate::forge::{ForgeApi, HookSpec};
use crate::reconcile::tolerant::tolerant;
use crate::templates::{LISTENER_SERVICE, ORG_NAME};

/// Status some forge versions return when listing hooks on a repo that has
/// none configured yet.
const NO_HOOKS: u16 = 400;

/// Status for a duplicate hook create.
const NOT_MODIFIED: u16 = 304;

/// Whether a listener hook is already installed on `repo`.
///
/// Detection matches on the listener path segment inside the configured
/// URL, not the full address: the listener may resolve to a different
/// host/IP across runs while the segment stays stable.
pub async fn has_listener_hook(api: &dyn ForgeApi, log: &mut ErrorLog, repo: &str) -> bool {
    let hooks = tolerant(
        log,
        &format!("list hooks on {repo}"),
        Some(NO_HOOKS),
        api.list_hooks(ORG_NAME, repo),
    )
    .await
    .unwrap_or_default();
    hooks
        .iter()
        .any(|hook| hook.config.url.contains(LISTENER_SERVICE))
}

/// Installs the push-event listener hook on `repo` unless one exists.
pub async fn ensure_hook(
    api: &dyn ForgeApi,
    resolver: &dyn ServiceResolver,
    log: &mut ErrorLog,
    repo: &str,
    namespace: &str,
) {
    let url = discovery::listener_url(resolver, namespace).await;
    if has_listener_hook(api, log, repo).await {
        tracing::info!(repo, "listener hook already installed");
        return;
    }
    tracing::info!(repo, %url, "installing listener hook");
    let hook = HookSpec::push_hook(url);
    tolerant(
        log,
        &format!("create hook on {repo}"),
        Some(NOT_MODIFIED),
        api.create_hook(ORG_NAME, repo, &hook),
    )
    .await;
}
