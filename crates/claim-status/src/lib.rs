pub mod config;
pub mod error;
pub mod scenarios;
pub mod status;
pub mod telemetry;
