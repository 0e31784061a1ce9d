use anyhow::Context;
use watch_logging::watch_info;

use sitewatch_app::logging::{self, LogDestination};
use sitewatch_app::{GatewayNotifier, LoggingGateway, WatchConfig};
use sitewatch_engine::{run_scheduler, ProbeSettings, ReqwestProber, SiteStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::initialize(LogDestination::Both);

    let config = WatchConfig::from_env()?;
    watch_info!(
        "starting sitewatch: data file {:?}, sweep interval {}m, credential loaded ({} bytes)",
        config.data_file,
        config.interval_minutes,
        config.token.len()
    );

    let store = SiteStore::new(config.data_file.clone());
    let prober = ReqwestProber::new(ProbeSettings::default()).context("building HTTP client")?;
    let notifier = GatewayNotifier::new(LoggingGateway);

    tokio::spawn(run_scheduler(
        store,
        prober,
        notifier,
        config.interval_minutes,
    ));

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    watch_info!("shutting down");
    Ok(())
}
