use clap::Parser;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use crate::bootstrap;
use crate::config::{self, Settings};
use crate::discovery::DnsResolver;
use crate::forge::{self, HttpForge};

#[derive(Parser)]
#[command(name = "forge-operator")]
#[command(about = "Bootstraps the team/repository topology of the platform forge", version)]
pub struct Cli {
    /// Base URL of the forge backend.
    #[arg(long, env = "FORGE_URL")]
    base_url: String,
    /// Admin API token.
    #[arg(long, env = "FORGE_TOKEN", hide_env_values = true)]
    token: String,
    /// Tenant list as a JSON array of `{"id", "selfService"}` objects.
    #[arg(long, env = "FORGE_TENANTS", default_value = "[]")]
    tenants: String,
    /// Create per-tenant GitOps companion repositories.
    #[arg(long, env = "FORGE_ARGOCD_ENABLED")]
    argocd_enabled: bool,
    /// Namespace the pipeline event listener runs in.
    #[arg(long, env = "FORGE_PIPELINE_NAMESPACE", default_value = "tekton-pipelines")]
    pipeline_namespace: String,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        init_tracing();

        let tenants = config::parse_tenants(&self.tenants)?;
        let settings = Settings {
            base_url: self.base_url,
            token: self.token,
            tenants,
            argocd_enabled: self.argocd_enabled,
            pipeline_namespace: self.pipeline_namespace,
        };

        let runtime = Runtime::new()?;
        let log = runtime.block_on(async {
            forge::wait_until_ready(&settings.base_url).await?;
            let api = HttpForge::new(&settings.base_url, &settings.token);
            Ok::<_, anyhow::Error>(bootstrap::run(&settings, &api, &DnsResolver).await)
        })?;

        if log.is_empty() {
            println!("forge bootstrap complete");
            Ok(())
        } else {
            eprintln!("{}", log.to_json());
            anyhow::bail!("bootstrap finished with {} error(s)", log.entries().len())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
