use crate::cli::ServeArgs;
use crate::infra::{load_gateway, AppState};
use crate::routes::with_claim_status_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use claim_status::config::AppConfig;
use claim_status::error::AppError;
use claim_status::status::ClaimStatusService;
use claim_status::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let gateway = Arc::new(load_gateway(&config.gateway)?);
    let claim_service = Arc::new(ClaimStatusService::new(
        gateway,
        config.classifier.clone(),
    ));

    let app = with_claim_status_routes(claim_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        ignored_statuses = config.classifier.ignored_statuses.len(),
        "claim status service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
