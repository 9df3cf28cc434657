use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_platform_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use corecomply::auth::provider_for;
use corecomply::config::AppConfig;
use corecomply::error::AppError;
use corecomply::integrations::{IntegrationState, SimulatedPayrollClient};
use corecomply::jobs::JobRunner;
use corecomply::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(load_catalog(args.catalog.as_deref())?);
    let identity = provider_for(config.auth.provider);
    info!(provider = identity.name(), "identity provider selected");

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        identity: Arc::clone(&identity),
    };

    let integrations = IntegrationState {
        client: Arc::new(SimulatedPayrollClient::new(config.integrations.latency)),
        identity,
    };

    let app = with_platform_routes(catalog, integrations)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scheduler = JobRunner::standard().spawn_periodic(config.jobs.interval, shutdown_rx);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "corecomply api ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    readiness_flag.store(false, Ordering::Release);
    let _ = shutdown_tx.send(true);
    if let Err(err) = scheduler.await {
        warn!(error = %err, "job scheduler task failed");
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
