//! Tour ratings server entry-point: loads settings, prepares persistence,
//! and serves the REST API.

mod server;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig as _;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server, drain_on};
use tour_ratings::inbound::http::health::HealthState;
use tour_ratings::outbound::persistence::{DbPool, run_pending_migrations};
use tour_ratings::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load server settings")?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err("invalid TOUR_RATINGS_BIND_ADDR")?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(pool_config) = settings.pool_config() {
        if settings.skip_migrations {
            info!("skipping database migrations");
        } else {
            run_pending_migrations(pool_config.database_url())
                .await
                .wrap_err("failed to migrate database")?;
        }
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    } else {
        warn!("TOUR_RATINGS_DATABASE_URL is not set; serving fixture data");
    }

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(make_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    let server =
        create_server(health_state.clone(), config).wrap_err("failed to start HTTP server")?;
    actix_web::rt::spawn(drain_on(ctrl_c(), health_state, server.handle()));
    info!(%bind_addr, "tour ratings server listening");
    server.await.wrap_err("HTTP server terminated abnormally")
}

/// Resolve on Ctrl-C; never resolve if the signal handler cannot be
/// installed.
async fn ctrl_c() {
    if let Err(error) = actix_web::rt::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("tour_ratings")
        .endpoint("/metrics")
        .build()
        .map_err(|err| color_eyre::eyre::eyre!("failed to configure Prometheus metrics: {err}"))
}
