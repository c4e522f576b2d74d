use chrono::NaiveDate;
use claim_status::config::GatewayConfig;
use claim_status::error::AppError;
use claim_status::status::InMemoryClaimGateway;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the claim gateway, seeding it from the fixture file when configured.
pub(crate) fn load_gateway(config: &GatewayConfig) -> Result<InMemoryClaimGateway, AppError> {
    match &config.fixtures {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let gateway = InMemoryClaimGateway::from_json(&raw)?;
            info!(path = %path.display(), claims = gateway.len(), "loaded claim fixtures");
            Ok(gateway)
        }
        None => Ok(InMemoryClaimGateway::default()),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
