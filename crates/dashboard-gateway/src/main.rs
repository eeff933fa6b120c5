//! thesis-dashboard: serves the thesis PCA report dashboard over HTTP.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use dashboard_gateway::{DashboardGatewayService, GatewayConfig};
use dashboard_telemetry::{init_telemetry, TelemetryConfig};

/// Thesis dashboard viewer
#[derive(Parser, Debug)]
#[command(name = "thesis-dashboard")]
#[command(version, about = "Serves the thesis PCA dashboard: interactive charts, images and Excel downloads")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Application root holding html/, png/ and excel/
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// HTTP port
    #[arg(short, long)]
    port: Option<u16>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<GatewayConfig> {
        let mut config = match &self.config {
            Some(path) => GatewayConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GatewayConfig::default(),
        };

        if let Some(root) = self.root {
            config.artifacts.root = root;
        }
        if let Some(port) = self.port {
            config.http.port = port;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _telemetry = init_telemetry(TelemetryConfig::from_env())?;

    let config = args.into_config()?;
    let service = DashboardGatewayService::new(config)?;

    service
        .start(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    info!("Goodbye");
    Ok(())
}
