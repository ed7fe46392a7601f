//! Cluster service discovery for the pipeline event listener.

use async_trait::async_trait;

use crate::templates::{LISTENER_PORT, LISTENER_SERVICE};

/// Resolves a cluster service to a reachable host.
#[async_trait]
pub trait ServiceResolver: Send + Sync {
    /// Returns a host (name or address) for `service` in `namespace`.
    async fn resolve(&self, service: &str, namespace: &str) -> anyhow::Result<String>;
}

/// Resolver backed by the cluster DNS.
pub struct DnsResolver;

#[async_trait]
impl ServiceResolver for DnsResolver {
    async fn resolve(&self, service: &str, namespace: &str) -> anyhow::Result<String> {
        let name = format!("{service}.{namespace}.svc.cluster.local");
        let mut addrs =
            tokio::net::lookup_host((name.as_str(), LISTENER_PORT)).await.map_err(|err| {
                anyhow::anyhow!("lookup of {name} failed: {err}")
            })?;
        match addrs.next() {
            Some(addr) => Ok(addr.ip().to_string()),
            None => Err(anyhow::anyhow!("lookup of {name} returned no addresses")),
        }
    }
}

/// The in-cluster DNS address used when resolution fails.
#[must_use]
pub fn fallback_listener_url(namespace: &str) -> String {
    format!(
        "http://{LISTENER_SERVICE}.{namespace}.svc.cluster.local:{LISTENER_PORT}/{LISTENER_SERVICE}"
    )
}

/// Resolves the event listener URL, falling back to the well-known cluster
/// DNS name. One lookup per run; a failure means "use the fallback", never
/// a retry.
///
/// Both forms end with the `/el-forge-webhook` path segment: hook detection
/// matches on that segment, so a hook installed from a resolved IP is still
/// recognized on later runs when the address resolves differently.
pub async fn listener_url(resolver: &dyn ServiceResolver, namespace: &str) -> String {
    match resolver.resolve(LISTENER_SERVICE, namespace).await {
        Ok(host) => format!("http://{host}:{LISTENER_PORT}/{LISTENER_SERVICE}"),
        Err(err) => {
            tracing::info!(%err, "listener resolution failed, using cluster DNS fallback");
            fallback_listener_url(namespace)
        }
    }
}
