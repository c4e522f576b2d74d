use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::scenarios::ClassifierConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub classifier: ClassifierConfig,
    pub gateway: GatewayConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut classifier = ClassifierConfig::default();
        if let Ok(raw) = env::var("APP_IGNORED_DETERMINATION_STATUSES") {
            classifier.ignored_statuses = parse_status_list(&raw)?;
        }
        if let Ok(raw) = env::var("APP_MINIMUM_VALID_DATE") {
            classifier.minimum_valid_date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| ConfigError::InvalidMinimumDate { value: raw.clone() })?;
        }

        let fixtures = env::var("APP_CLAIM_FIXTURES")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            classifier,
            gateway: GatewayConfig { fixtures },
        })
    }
}

fn parse_status_list(raw: &str) -> Result<std::collections::BTreeSet<String>, ConfigError> {
    let statuses: std::collections::BTreeSet<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|status| !status.is_empty())
        .map(str::to_string)
        .collect();

    if statuses.is_empty() {
        return Err(ConfigError::EmptyStatusList);
    }
    Ok(statuses)
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where claim records come from when no live gateway is wired in.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    pub fixtures: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidMinimumDate { value: String },
    EmptyStatusList,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidMinimumDate { value } => {
                write!(f, "APP_MINIMUM_VALID_DATE '{value}' must be YYYY-MM-DD")
            }
            ConfigError::EmptyStatusList => write!(
                f,
                "APP_IGNORED_DETERMINATION_STATUSES must list at least one status"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidMinimumDate { .. }
            | ConfigError::EmptyStatusList => None,
        }
    }
}
